use serde::{Deserialize, Serialize};

use crate::models::domain::{User, UserRole};

/// User as returned by the API. The stored password hash is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub telegram_id: i64,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub course_id: Option<i32>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            telegram_id: user.telegram_id,
            name: user.name,
            surname: user.surname,
            username: user.username,
            email: user.email,
            role: user.role,
            course_id: user.course_id,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            is_verified: user.is_verified,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// Per-course quiz overview entry, projected straight out of the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOverview {
    pub quiz_number: i32,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_url: String,
    pub file_key: String,
}
