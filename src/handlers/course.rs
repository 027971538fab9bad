use crate::models::*;
use crate::services::CourseService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/courses",
    tag = "courses",
    params(PaginationParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Направление: list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_courses(
    course_service: web::Data<CourseService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match course_service.list_courses(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Направление id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Направление", body = CourseResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_course(
    course_service: web::Data<CourseService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match course_service.get_course(path.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/admin/courses",
    tag = "courses",
    request_body = CourseRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Направление: added", body = CourseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_course(
    course_service: web::Data<CourseService>,
    request: web::Json<CourseRequest>,
) -> Result<HttpResponse> {
    match course_service.create_course(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Направление id")),
    request_body = CourseRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Направление: changed", body = CourseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_course(
    course_service: web::Data<CourseService>,
    path: web::Path<i64>,
    request: web::Json<CourseRequest>,
) -> Result<HttpResponse> {
    match course_service
        .update_course(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/courses/{id}",
    tag = "courses",
    params(("id" = i64, Path, description = "Направление id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Направление: deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_course(
    course_service: web::Data<CourseService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match course_service.delete_course(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn course_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );
}
