use crate::models::*;
use crate::services::ClientSubscriptionService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/client-subscriptions",
    tag = "client_subscriptions",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Абонемент: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_client_subscriptions(
    client_subscription_service: web::Data<ClientSubscriptionService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match client_subscription_service.list_client_subscriptions(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/client-subscriptions/{id}",
    tag = "client_subscriptions",
    params(("id" = i64, Path, description = "Абонемент id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Абонемент", body = ClientSubscriptionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client_subscription(
    client_subscription_service: web::Data<ClientSubscriptionService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match client_subscription_service.get_client_subscription(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/client-subscriptions",
    tag = "client_subscriptions",
    request_body = ClientSubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Абонемент: added", body = ClientSubscriptionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_client_subscription(
    client_subscription_service: web::Data<ClientSubscriptionService>,
    request: web::Json<ClientSubscriptionRequest>,
) -> Result<HttpResponse> {
    match client_subscription_service.create_client_subscription(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/client-subscriptions/{id}",
    tag = "client_subscriptions",
    params(("id" = i64, Path, description = "Абонемент id")),
    request_body = ClientSubscriptionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Абонемент: changed", body = ClientSubscriptionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_client_subscription(
    client_subscription_service: web::Data<ClientSubscriptionService>,
    path: web::Path<i64>,
    request: web::Json<ClientSubscriptionRequest>,
) -> Result<HttpResponse> {
    match client_subscription_service
        .update_client_subscription(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/client-subscriptions/{id}",
    tag = "client_subscriptions",
    params(("id" = i64, Path, description = "Абонемент id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Абонемент: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_client_subscription(
    client_subscription_service: web::Data<ClientSubscriptionService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match client_subscription_service.delete_client_subscription(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn client_subscription_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/client-subscriptions")
            .route("", web::get().to(list_client_subscriptions))
            .route("", web::post().to(create_client_subscription))
            .route("/{id}", web::get().to(get_client_subscription))
            .route("/{id}", web::put().to(update_client_subscription))
            .route("/{id}", web::delete().to(delete_client_subscription)),
    );
}
