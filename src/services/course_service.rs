use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Course,
    models::dto::request::{CreateCourseRequest, UpdateCourseRequest},
    repositories::{CourseRepository, NewCourse},
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        if self
            .repository
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "This course name already registered".to_string(),
            ));
        }

        self.repository
            .create(NewCourse {
                name: request.name,
                start_date: request.start_date,
                end_date: request.end_date,
                people_count: request.people_count,
            })
            .await
    }

    pub async fn get_course(&self, id: i32) -> AppResult<Course> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }

    pub async fn list_courses(&self, skip: i64, limit: i64) -> AppResult<Vec<Course>> {
        self.repository.list(skip, limit).await
    }

    pub async fn update_course(
        &self,
        id: i32,
        request: UpdateCourseRequest,
    ) -> AppResult<Course> {
        request.validate()?;

        let mut course = self.get_course(id).await?;
        request.apply_to(&mut course);

        self.repository.update(&course).await?;
        Ok(course)
    }

    pub async fn delete_course(&self, id: i32) -> AppResult<String> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(format!("Course with id: {}, deleted", id))
    }
}
