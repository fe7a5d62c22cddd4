use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Student
    }
}

/// Row of the `user` table. `hashed_password` never leaves the process; API
/// responses go through `UserResponse`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub telegram_id: i64,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub role: UserRole,
    pub course_id: Option<i32>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

#[cfg(test)]
impl User {
    pub fn test_user(id: i32, username: &str) -> Self {
        User {
            id,
            telegram_id: 1000 + id as i64,
            name: "Test".to_string(),
            surname: "User".to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            hashed_password: String::new(),
            role: UserRole::Student,
            course_id: Some(1),
            is_active: true,
            is_superuser: false,
            is_verified: false,
        }
    }
}
