use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateGradeRequest, PaginationParams, UpdateGradeRequest},
    models::dto::response::MessageResponse,
};

#[post("/grades")]
pub async fn create_grade(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateGradeRequest>,
) -> Result<HttpResponse, AppError> {
    let grade = state
        .grade_service
        .create_grade(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(grade))
}

#[get("/grades")]
pub async fn list_grades(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let grades = state
        .grade_service
        .list_grades(query.skip(), query.limit())
        .await?;
    Ok(HttpResponse::Ok().json(grades))
}

/// Quiz numbers the user has a grade for in the course.
#[get("/grades/course/{course_id}/users/{user_id}/numbers")]
pub async fn completed_quiz_numbers(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, user_id) = path.into_inner();
    let numbers = state
        .grade_service
        .completed_quiz_numbers(course_id, user_id)
        .await?;
    Ok(HttpResponse::Ok().json(numbers))
}

/// Full grade records for the (course, user) pair.
#[get("/grades/course/{course_id}/users/{user_id}")]
pub async fn user_progress(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, user_id) = path.into_inner();
    let grades = state.grade_service.progress(course_id, user_id).await?;
    Ok(HttpResponse::Ok().json(grades))
}

#[get("/grades/{id}")]
pub async fn get_grade(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let grade = state.grade_service.get_grade(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(grade))
}

#[put("/grades/{id}")]
pub async fn update_grade(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
    request: web::Json<UpdateGradeRequest>,
) -> Result<HttpResponse, AppError> {
    let grade = state
        .grade_service
        .update_grade(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(grade))
}

#[delete("/grades/{id}")]
pub async fn delete_grade(
    state: web::Data<Arc<AppState>>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let message = state.grade_service.delete_grade(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
