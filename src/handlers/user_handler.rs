use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateUserRequest, PaginationParams, UpdateUserRequest},
    models::dto::response::{MessageResponse, UserResponse},
};

#[post("/users")]
pub async fn create_user(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("/users")]
pub async fn list_users(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let users = state
        .user_service
        .list_users(query.skip(), query.limit())
        .await?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

#[get("/users/{telegram_id}")]
pub async fn get_user(
    state: web::Data<Arc<AppState>>,
    telegram_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .get_user_by_telegram_id(telegram_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/users/{telegram_id}")]
pub async fn update_user(
    state: web::Data<Arc<AppState>>,
    telegram_id: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_user_by_telegram_id(telegram_id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/users/{telegram_id}")]
pub async fn delete_user(
    state: web::Data<Arc<AppState>>,
    telegram_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .user_service
        .delete_user_by_telegram_id(telegram_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let mongo_health = state.mongo.health_check().await;

    let status = if mongo_health.is_ok() { "ready" } else { "not_ready" };
    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if mongo_health.is_ok() { "ok" } else { "error" }
        }
    });

    if mongo_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
