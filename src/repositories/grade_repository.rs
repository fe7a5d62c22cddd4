use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{errors::AppResult, models::domain::Grade};

#[derive(Clone, Debug)]
pub struct NewGrade {
    pub course_id: i32,
    pub user_id: i32,
    pub grade: f64,
    pub quiz_number: i32,
    pub date: DateTime<Utc>,
    pub time_completion: f64,
}

#[async_trait]
pub trait GradeRepository: Send + Sync {
    async fn create(&self, grade: NewGrade) -> AppResult<Grade>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Grade>>;
    /// Lookup on the (course_id, user_id, quiz_number) uniqueness key.
    async fn find_by_unique_key(
        &self,
        course_id: i32,
        user_id: i32,
        quiz_number: i32,
    ) -> AppResult<Option<Grade>>;
    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Grade>>;
    async fn quiz_numbers_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<i32>>;
    async fn grades_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<Grade>>;
    async fn update(&self, grade: &Grade) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

pub struct PgGradeRepository {
    pool: PgPool,
}

impl PgGradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const GRADE_COLUMNS: &str = "id, course_id, user_id, grade, quiz_number, date, time_completion";

#[async_trait]
impl GradeRepository for PgGradeRepository {
    async fn create(&self, grade: NewGrade) -> AppResult<Grade> {
        let query = format!(
            "INSERT INTO grade (course_id, user_id, grade, quiz_number, date, time_completion) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {GRADE_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Grade>(&query)
            .bind(grade.course_id)
            .bind(grade.user_id)
            .bind(grade.grade)
            .bind(grade.quiz_number)
            .bind(grade.date)
            .bind(grade.time_completion)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Grade>> {
        let query = format!("SELECT {GRADE_COLUMNS} FROM grade WHERE id = $1");
        Ok(sqlx::query_as::<_, Grade>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_unique_key(
        &self,
        course_id: i32,
        user_id: i32,
        quiz_number: i32,
    ) -> AppResult<Option<Grade>> {
        let query = format!(
            "SELECT {GRADE_COLUMNS} FROM grade \
             WHERE course_id = $1 AND user_id = $2 AND quiz_number = $3"
        );
        Ok(sqlx::query_as::<_, Grade>(&query)
            .bind(course_id)
            .bind(user_id)
            .bind(quiz_number)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Grade>> {
        let query = format!("SELECT {GRADE_COLUMNS} FROM grade ORDER BY id OFFSET $1 LIMIT $2");
        Ok(sqlx::query_as::<_, Grade>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn quiz_numbers_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<i32>> {
        Ok(sqlx::query_scalar::<_, i32>(
            "SELECT quiz_number FROM grade WHERE course_id = $1 AND user_id = $2 \
             ORDER BY quiz_number",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn grades_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<Grade>> {
        let query = format!(
            "SELECT {GRADE_COLUMNS} FROM grade \
             WHERE course_id = $1 AND user_id = $2 ORDER BY quiz_number"
        );
        Ok(sqlx::query_as::<_, Grade>(&query)
            .bind(course_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn update(&self, grade: &Grade) -> AppResult<()> {
        sqlx::query(
            "UPDATE grade SET course_id = $1, user_id = $2, grade = $3, quiz_number = $4, \
             date = $5, time_completion = $6 WHERE id = $7",
        )
        .bind(grade.course_id)
        .bind(grade.user_id)
        .bind(grade.grade)
        .bind(grade.quiz_number)
        .bind(grade.date)
        .bind(grade.time_completion)
        .bind(grade.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM grade WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
