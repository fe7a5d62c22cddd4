use std::sync::Arc;

use actix_web::{get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{removal_cookie, session_cookie, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{LoginRequest, RegisterRequest, UpdateUserRequest},
    models::dto::response::{LoginResponse, MessageResponse, UserResponse},
};

/// Verifies credentials and sets the session cookie. Wrong password, unknown
/// identifier, and inactive account all produce the same 400.
#[post("/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let user = state.user_service.authenticate(&request).await?;

    let token = state.jwt_service.create_token(&user)?;
    log::info!("User {} (id {}) logged in", user.email, user.id);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token.clone()))
        .json(LoginResponse {
            access_token: token,
            token_type: "bearer".to_string(),
            user: UserResponse::from(user),
        }))
}

/// Clears the cookie. The token itself stays valid until expiry.
#[post("/logout")]
pub async fn logout(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let user = auth.0;
    log::info!("User {} (id {}) logged out", user.email, user.id);

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(MessageResponse::new("Successfully logged out")))
}

#[post("/auth/register")]
pub async fn register(
    state: web::Data<Arc<AppState>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("/auth/users/me")]
pub async fn current_user(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(auth.0)))
}

#[patch("/auth/users/me")]
pub async fn update_current_user(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedUser,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_profile(auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Authenticated ping.
#[get("/auth/test")]
pub async fn auth_test(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Authentication successful!",
        "user": UserResponse::from(auth.0),
    })))
}
