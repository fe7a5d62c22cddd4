use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Grade,
    models::dto::request::{CreateGradeRequest, UpdateGradeRequest},
    repositories::{GradeRepository, NewGrade},
};

pub struct GradeService {
    repository: Arc<dyn GradeRepository>,
}

impl GradeService {
    pub fn new(repository: Arc<dyn GradeRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_grade(&self, request: CreateGradeRequest) -> AppResult<Grade> {
        request.validate()?;

        // Pre-insert check on (course_id, user_id, quiz_number); the check and
        // the insert are not atomic.
        if self
            .repository
            .find_by_unique_key(request.course_id, request.user_id, request.quiz_number)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "Grade for this quiz already registered".to_string(),
            ));
        }

        self.repository
            .create(NewGrade {
                course_id: request.course_id,
                user_id: request.user_id,
                grade: request.grade,
                quiz_number: request.quiz_number,
                date: request.date,
                time_completion: request.time_completion,
            })
            .await
    }

    pub async fn get_grade(&self, id: i32) -> AppResult<Grade> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Grade not found".to_string()))
    }

    pub async fn list_grades(&self, skip: i64, limit: i64) -> AppResult<Vec<Grade>> {
        self.repository.list(skip, limit).await
    }

    /// Quiz numbers the user already completed in the course.
    pub async fn completed_quiz_numbers(
        &self,
        course_id: i32,
        user_id: i32,
    ) -> AppResult<Vec<i32>> {
        self.repository.quiz_numbers_for(course_id, user_id).await
    }

    pub async fn progress(&self, course_id: i32, user_id: i32) -> AppResult<Vec<Grade>> {
        self.repository.grades_for(course_id, user_id).await
    }

    pub async fn update_grade(&self, id: i32, request: UpdateGradeRequest) -> AppResult<Grade> {
        request.validate()?;

        let mut grade = self.get_grade(id).await?;
        request.apply_to(&mut grade);

        self.repository.update(&grade).await?;
        Ok(grade)
    }

    pub async fn delete_grade(&self, id: i32) -> AppResult<String> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Grade not found".to_string()));
        }

        Ok(format!("Grade with id: {}, deleted", id))
    }
}
