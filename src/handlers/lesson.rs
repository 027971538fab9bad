use crate::models::*;
use crate::services::LessonService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/lessons",
    tag = "lessons",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Занятие: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_lessons(
    lesson_service: web::Data<LessonService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match lesson_service.list_lessons(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/lessons/{id}",
    tag = "lessons",
    params(("id" = i64, Path, description = "Занятие id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Занятие", body = LessonResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_lesson(
    lesson_service: web::Data<LessonService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match lesson_service.get_lesson(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/lessons",
    tag = "lessons",
    request_body = LessonRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Занятие: added", body = LessonResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_lesson(
    lesson_service: web::Data<LessonService>,
    request: web::Json<LessonRequest>,
) -> Result<HttpResponse> {
    match lesson_service.create_lesson(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/lessons/{id}",
    tag = "lessons",
    params(("id" = i64, Path, description = "Занятие id")),
    request_body = LessonRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Занятие: changed", body = LessonResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_lesson(
    lesson_service: web::Data<LessonService>,
    path: web::Path<i64>,
    request: web::Json<LessonRequest>,
) -> Result<HttpResponse> {
    match lesson_service
        .update_lesson(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/lessons/{id}",
    tag = "lessons",
    params(("id" = i64, Path, description = "Занятие id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Занятие: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_lesson(
    lesson_service: web::Data<LessonService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match lesson_service.delete_lesson(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn lesson_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lessons")
            .route("", web::get().to(list_lessons))
            .route("", web::post().to(create_lesson))
            .route("/{id}", web::get().to(get_lesson))
            .route("/{id}", web::put().to(update_lesson))
            .route("/{id}", web::delete().to(delete_lesson)),
    );
}
