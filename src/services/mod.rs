pub mod course_service;
pub mod grade_service;
pub mod quiz_service;
pub mod user_service;

pub use course_service::CourseService;
pub use grade_service::GradeService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
