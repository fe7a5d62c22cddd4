pub mod auth_handler;
pub mod course_handler;
pub mod grade_handler;
pub mod quiz_handler;
pub mod storage_handler;
pub mod user_handler;
