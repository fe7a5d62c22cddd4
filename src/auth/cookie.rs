use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::auth::claims::TOKEN_TTL_SECONDS;

pub const AUTH_COOKIE_NAME: &str = "auth_token";

/// Session cookie carrying the signed token. HTTP-only and lax same-site,
/// with the same lifetime as the token itself.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(TOKEN_TTL_SECONDS))
        .finish()
}

/// Expired cookie sent on logout. The token itself stays valid until its
/// natural expiry; there is no server-side revocation.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}
