pub mod claims;
pub mod cookie;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use cookie::{removal_cookie, session_cookie, AUTH_COOKIE_NAME};
pub use jwt::JwtService;
pub use middleware::AuthenticatedUser;
