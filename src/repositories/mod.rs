pub mod course_repository;
pub mod grade_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use course_repository::{CourseRepository, NewCourse, PgCourseRepository};
pub use grade_repository::{GradeRepository, NewGrade, PgGradeRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_repository::{NewUser, PgUserRepository, UserRepository};
