use crate::models::*;
use crate::services::SubscriptionService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/subscriptions",
    tag = "subscriptions",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Тип абонемента: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_subscriptions(
    subscription_service: web::Data<SubscriptionService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match subscription_service.list_subscriptions(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/subscriptions/{id}",
    tag = "subscriptions",
    params(("id" = i64, Path, description = "Тип абонемента id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Тип абонемента", body = SubscriptionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match subscription_service.get_subscription(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/subscriptions",
    tag = "subscriptions",
    request_body = SubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Тип абонемента: added", body = SubscriptionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_subscription(
    subscription_service: web::Data<SubscriptionService>,
    request: web::Json<SubscriptionRequest>,
) -> Result<HttpResponse> {
    match subscription_service.create_subscription(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/subscriptions/{id}",
    tag = "subscriptions",
    params(("id" = i64, Path, description = "Тип абонемента id")),
    request_body = SubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Тип абонемента: changed", body = SubscriptionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<i64>,
    request: web::Json<SubscriptionRequest>,
) -> Result<HttpResponse> {
    match subscription_service
        .update_subscription(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/subscriptions/{id}",
    tag = "subscriptions",
    params(("id" = i64, Path, description = "Тип абонемента id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Тип абонемента: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_subscription(
    subscription_service: web::Data<SubscriptionService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match subscription_service.delete_subscription(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn subscription_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subscriptions")
            .route("", web::get().to(list_subscriptions))
            .route("", web::post().to(create_subscription))
            .route("/{id}", web::get().to(get_subscription))
            .route("/{id}", web::put().to(update_subscription))
            .route("/{id}", web::delete().to(delete_subscription)),
    );
}
