use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Course, Grade, User, UserRole};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub skip: Option<i64>,

    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(range(min = 0))]
    pub telegram_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub surname: String,

    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub course_id: Option<i32>,

    #[serde(default)]
    pub role: UserRole,

    /// Bot-side registration may omit the password; such accounts cannot log
    /// in until one is set through the auth routes.
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(range(min = 0))]
    pub telegram_id: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub surname: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub course_id: Option<i32>,
    pub role: Option<UserRole>,

    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,

    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_verified: Option<bool>,
}

impl UpdateUserRequest {
    /// Partial-field merge. The password is not applied here; re-hashing is
    /// the service's job.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(telegram_id) = self.telegram_id {
            user.telegram_id = telegram_id;
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(surname) = &self.surname {
            user.surname = surname.clone();
        }
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(course_id) = self.course_id {
            user.course_id = Some(course_id);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(is_superuser) = self.is_superuser {
            user.is_superuser = is_superuser;
        }
        if let Some(is_verified) = self.is_verified {
            user.is_verified = is_verified;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(range(min = 0))]
    pub telegram_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub surname: String,

    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    pub course_id: Option<i32>,

    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email or username; both are tried, in that order.
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(range(min = 0))]
    pub people_count: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub people_count: Option<i32>,
}

impl UpdateCourseRequest {
    /// Partial-field merge: unset fields keep their stored values.
    pub fn apply_to(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
        if let Some(start_date) = self.start_date {
            course.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            course.end_date = end_date;
        }
        if let Some(people_count) = self.people_count {
            course.people_count = people_count;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGradeRequest {
    pub course_id: i32,
    pub user_id: i32,
    pub grade: f64,
    pub quiz_number: i32,
    pub date: DateTime<Utc>,
    pub time_completion: f64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGradeRequest {
    pub course_id: Option<i32>,
    pub user_id: Option<i32>,
    pub grade: Option<f64>,
    pub quiz_number: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub time_completion: Option<f64>,
}

impl UpdateGradeRequest {
    pub fn apply_to(&self, grade: &mut Grade) {
        if let Some(course_id) = self.course_id {
            grade.course_id = course_id;
        }
        if let Some(user_id) = self.user_id {
            grade.user_id = user_id;
        }
        if let Some(value) = self.grade {
            grade.grade = value;
        }
        if let Some(quiz_number) = self.quiz_number {
            grade.quiz_number = quiz_number;
        }
        if let Some(date) = self.date {
            grade.date = date;
        }
        if let Some(time_completion) = self.time_completion {
            grade.time_completion = time_completion;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadParams {
    pub filename: String,
}
