use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::{mongo::Database, postgres, S3Storage},
    errors::AppResult,
    repositories::{MongoQuizRepository, PgCourseRepository, PgGradeRepository, PgUserRepository},
    services::{CourseService, GradeService, QuizService, UserService},
};

/// Store handles and services, constructed once at startup and shared by every
/// request handler. No ambient singletons.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub grade_service: Arc<GradeService>,
    pub quiz_service: Arc<QuizService>,
    pub storage: Arc<S3Storage>,
    pub jwt_service: Arc<JwtService>,
    pub mongo: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let pool = postgres::connect(&config).await?;
        let mongo = Database::connect(&config).await?;
        let storage = Arc::new(S3Storage::connect(&config).await);

        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let course_repository = Arc::new(PgCourseRepository::new(pool.clone()));
        let grade_repository = Arc::new(PgGradeRepository::new(pool));
        let quiz_repository = Arc::new(MongoQuizRepository::new(&mongo));

        Ok(Self {
            user_service: Arc::new(UserService::new(user_repository)),
            course_service: Arc::new(CourseService::new(course_repository)),
            grade_service: Arc::new(GradeService::new(grade_repository)),
            quiz_service: Arc::new(QuizService::new(quiz_repository)),
            storage,
            jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
            mongo,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
impl AppState {
    /// State wired to stores that are never dialed; nothing here opens a
    /// connection, so handler tests can exercise paths that fail before any
    /// query is issued.
    pub async fn test_state() -> Self {
        let config = Config::test_config();
        let pool = postgres::lazy_pool(&config).unwrap();
        let mongo = Database::test_database().await;
        let storage = Arc::new(S3Storage::connect(&config).await);

        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let course_repository = Arc::new(PgCourseRepository::new(pool.clone()));
        let grade_repository = Arc::new(PgGradeRepository::new(pool));
        let quiz_repository = Arc::new(MongoQuizRepository::new(&mongo));

        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            course_service: Arc::new(CourseService::new(course_repository)),
            grade_service: Arc::new(GradeService::new(grade_repository)),
            quiz_service: Arc::new(QuizService::new(quiz_repository)),
            storage,
            jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
            mongo,
            config: Arc::new(config),
        }
    }
}
