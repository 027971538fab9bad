use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::SubscriptionType;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::me,
        handlers::account::list_accounts,
        handlers::account::get_account,
        handlers::account::create_account,
        handlers::account::update_account,
        handlers::account::delete_account,
        handlers::profile::list_profiles,
        handlers::profile::get_profile,
        handlers::profile::create_profile,
        handlers::profile::update_profile,
        handlers::profile::delete_profile,
        handlers::client::list_clients,
        handlers::client::get_client,
        handlers::client::create_client,
        handlers::client::update_client,
        handlers::client::delete_client,
        handlers::course::list_courses,
        handlers::course::get_course,
        handlers::course::create_course,
        handlers::course::update_course,
        handlers::course::delete_course,
        handlers::lesson::list_lessons,
        handlers::lesson::get_lesson,
        handlers::lesson::create_lesson,
        handlers::lesson::update_lesson,
        handlers::lesson::delete_lesson,
        handlers::subscription::list_subscriptions,
        handlers::subscription::get_subscription,
        handlers::subscription::create_subscription,
        handlers::subscription::update_subscription,
        handlers::subscription::delete_subscription,
        handlers::client_subscription::list_client_subscriptions,
        handlers::client_subscription::get_client_subscription,
        handlers::client_subscription::create_client_subscription,
        handlers::client_subscription::update_client_subscription,
        handlers::client_subscription::delete_client_subscription,
    ),
    components(
        schemas(
            AccountRequest,
            AccountResponse,
            LoginRequest,
            RefreshTokenRequest,
            AuthResponse,
            ProfileRequest,
            ProfileResponse,
            ClientRequest,
            ClientResponse,
            ScheduleRequest,
            ScheduleResponse,
            CourseRequest,
            CourseResponse,
            LessonRequest,
            LessonResponse,
            SubscriptionType,
            SubscriptionRequest,
            SubscriptionResponse,
            ClientSubscriptionRequest,
            ClientSubscriptionResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Staff login"),
        (name = "accounts", description = "Login accounts"),
        (name = "profiles", description = "Staff profiles"),
        (name = "clients", description = "Club clients"),
        (name = "courses", description = "Courses with their weekly schedule"),
        (name = "lessons", description = "Lesson sessions and attendance"),
        (name = "subscriptions", description = "Subscription plans"),
        (name = "client_subscriptions", description = "Subscriptions bought by clients"),
    ),
    info(
        title = "Club Accounting API",
        version = "1.0.0",
        description = "Administrative REST API of the club accounting backend"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_admin_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/admin/courses/{id}"));
        assert!(doc.paths.paths.contains_key("/auth/login"));
        let json = doc.to_json().unwrap();
        assert!(json.contains("bearer_auth"));
    }
}
