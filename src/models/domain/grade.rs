use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `grade` table. (course_id, user_id, quiz_number) is unique,
/// enforced by a pre-insert check in the service layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Grade {
    pub id: i32,
    pub course_id: i32,
    pub user_id: i32,
    pub grade: f64,
    pub quiz_number: i32,
    pub date: DateTime<Utc>,
    pub time_completion: f64,
}

#[cfg(test)]
impl Grade {
    pub fn test_grade(id: i32, course_id: i32, user_id: i32, quiz_number: i32) -> Self {
        Grade {
            id,
            course_id,
            user_id,
            grade: 87.5,
            quiz_number,
            date: Utc::now(),
            time_completion: 312.4,
        }
    }
}
