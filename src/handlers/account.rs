use crate::models::*;
use crate::services::AccountService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/accounts",
    tag = "accounts",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Пользователь: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_accounts(
    account_service: web::Data<AccountService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match account_service.list_accounts(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/accounts/{id}",
    tag = "accounts",
    params(("id" = i64, Path, description = "Пользователь id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Пользователь", body = AccountResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match account_service.get_account(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/accounts",
    tag = "accounts",
    request_body = AccountRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Пользователь: added", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_account(
    account_service: web::Data<AccountService>,
    request: web::Json<AccountRequest>,
) -> Result<HttpResponse> {
    match account_service.create_account(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/accounts/{id}",
    tag = "accounts",
    params(("id" = i64, Path, description = "Пользователь id")),
    request_body = AccountRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Пользователь: changed", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i64>,
    request: web::Json<AccountRequest>,
) -> Result<HttpResponse> {
    match account_service
        .update_account(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/accounts/{id}",
    tag = "accounts",
    params(("id" = i64, Path, description = "Пользователь id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Пользователь: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match account_service.delete_account(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn account_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .route("", web::get().to(list_accounts))
            .route("", web::post().to(create_account))
            .route("/{id}", web::get().to(get_account))
            .route("/{id}", web::put().to(update_account))
            .route("/{id}", web::delete().to(delete_account)),
    );
}
