use crate::models::*;
use crate::services::ClientService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/clients",
    tag = "clients",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Клиент: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_clients(
    client_service: web::Data<ClientService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match client_service.list_clients(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Клиент id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Клиент", body = ClientResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match client_service.get_client(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/clients",
    tag = "clients",
    request_body = ClientRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Клиент: added", body = ClientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_client(
    client_service: web::Data<ClientService>,
    request: web::Json<ClientRequest>,
) -> Result<HttpResponse> {
    match client_service.create_client(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Клиент id")),
    request_body = ClientRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Клиент: changed", body = ClientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
    request: web::Json<ClientRequest>,
) -> Result<HttpResponse> {
    match client_service
        .update_client(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Клиент id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Клиент: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match client_service.delete_client(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn client_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .route("", web::get().to(list_clients))
            .route("", web::post().to(create_client))
            .route("/{id}", web::get().to(get_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client)),
    );
}
