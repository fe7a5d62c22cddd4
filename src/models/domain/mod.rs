pub mod course;
pub mod grade;
pub mod quiz;
pub mod user;

pub use course::Course;
pub use grade::Grade;
pub use quiz::{AnswerOption, Question, Quiz};
pub use user::{User, UserRole};
