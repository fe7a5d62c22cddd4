use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row of the `course` table. start_date <= end_date is not enforced anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
}

#[cfg(test)]
impl Course {
    pub fn test_course(id: i32, name: &str) -> Self {
        Course {
            id,
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
            people_count: 25,
        }
    }
}
