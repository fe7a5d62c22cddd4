use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{
    auth::cookie::AUTH_COOKIE_NAME, auth::jwt::JwtService, errors::AppError,
    models::domain::User, services::UserService,
};

/// Extractor resolving the current user from the session cookie. Rejects with
/// 401 when the cookie is missing, the token invalid or expired, the user gone,
/// or the account inactive.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let jwt_service = req
                .app_data::<web::Data<JwtService>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalError("JWT service not configured".to_string())
                })?;
            let user_service = req
                .app_data::<web::Data<UserService>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalError("User service not configured".to_string())
                })?;

            let cookie = req
                .cookie(AUTH_COOKIE_NAME)
                .ok_or_else(|| AppError::Unauthorized("Missing authentication cookie".to_string()))?;

            let claims = jwt_service.validate_token(cookie.value())?;

            let user_id = claims
                .user_id()
                .ok_or_else(|| AppError::Unauthorized("Invalid token subject".to_string()))?;

            let user = user_service
                .get_user_by_id(user_id)
                .await
                .map_err(|_| AppError::Unauthorized("User no longer exists".to_string()))?;

            if !user.is_active {
                return Err(AppError::Unauthorized("Account is inactive".to_string()));
            }

            Ok(AuthenticatedUser(user))
        })
    }
}
