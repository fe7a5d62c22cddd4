use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateCourseRequest, PaginationParams, UpdateCourseRequest},
    models::dto::response::MessageResponse,
};

#[post("/courses")]
pub async fn create_course(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/courses")]
pub async fn list_courses(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let courses = state
        .course_service
        .list_courses(query.skip(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
    request: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let message = state.course_service.delete_course(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
