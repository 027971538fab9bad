use crate::models::*;
use crate::services::ProfileService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/profiles",
    tag = "profiles",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Профиль: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_profiles(
    profile_service: web::Data<ProfileService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match profile_service.list_profiles(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/profiles/{id}",
    tag = "profiles",
    params(("id" = i64, Path, description = "Профиль id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Профиль", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_profile(
    profile_service: web::Data<ProfileService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match profile_service.get_profile(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/profiles",
    tag = "profiles",
    request_body = ProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Профиль: added", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_profile(
    profile_service: web::Data<ProfileService>,
    request: web::Json<ProfileRequest>,
) -> Result<HttpResponse> {
    match profile_service.create_profile(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/profiles/{id}",
    tag = "profiles",
    params(("id" = i64, Path, description = "Профиль id")),
    request_body = ProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Профиль: changed", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_profile(
    profile_service: web::Data<ProfileService>,
    path: web::Path<i64>,
    request: web::Json<ProfileRequest>,
) -> Result<HttpResponse> {
    match profile_service
        .update_profile(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/profiles/{id}",
    tag = "profiles",
    params(("id" = i64, Path, description = "Профиль id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Профиль: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_profile(
    profile_service: web::Data<ProfileService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match profile_service.delete_profile(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn profile_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profiles")
            .route("", web::get().to(list_profiles))
            .route("", web::post().to(create_profile))
            .route("/{id}", web::get().to(get_profile))
            .route("/{id}", web::put().to(update_profile))
            .route("/{id}", web::delete().to(delete_profile)),
    );
}
