use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{errors::AppResult, models::domain::Course};

#[derive(Clone, Debug)]
pub struct NewCourse {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub people_count: i32,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: NewCourse) -> AppResult<Course>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Course>>;
    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Course>>;
    async fn update(&self, course: &Course) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, course: NewCourse) -> AppResult<Course> {
        let created = sqlx::query_as::<_, Course>(
            "INSERT INTO course (name, start_date, end_date, people_count) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, start_date, end_date, people_count",
        )
        .bind(&course.name)
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.people_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        Ok(sqlx::query_as::<_, Course>(
            "SELECT id, name, start_date, end_date, people_count FROM course WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Course>> {
        Ok(sqlx::query_as::<_, Course>(
            "SELECT id, name, start_date, end_date, people_count FROM course WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Course>> {
        Ok(sqlx::query_as::<_, Course>(
            "SELECT id, name, start_date, end_date, people_count FROM course \
             ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn update(&self, course: &Course) -> AppResult<()> {
        sqlx::query(
            "UPDATE course SET name = $1, start_date = $2, end_date = $3, people_count = $4 \
             WHERE id = $5",
        )
        .bind(&course.name)
        .bind(course.start_date)
        .bind(course.end_date)
        .bind(course.people_count)
        .bind(course.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM course WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
