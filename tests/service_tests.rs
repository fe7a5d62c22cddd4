use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use quiz_platform_server::{
    errors::{AppError, AppResult},
    models::domain::{AnswerOption, Course, Grade, Question, Quiz, User, UserRole},
    models::dto::request::{
        CreateCourseRequest, CreateGradeRequest, CreateUserRequest, LoginRequest,
        UpdateCourseRequest,
    },
    models::dto::response::QuizOverview,
    repositories::{
        CourseRepository, GradeRepository, NewCourse, NewGrade, NewUser, QuizRepository,
        UserRepository,
    },
    services::{CourseService, GradeService, QuizService, UserService},
};

struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        let user = User {
            id: users.len() as i32 + 1,
            telegram_id: user.telegram_id,
            name: user.name,
            surname: user.surname,
            username: user.username,
            email: user.email,
            hashed_password: user.hashed_password,
            role: user.role,
            course_id: user.course_id,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            is_verified: user.is_verified,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_telegram_id(&self, telegram_id: i64) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.telegram_id == telegram_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(stored) = users.iter_mut().find(|u| u.id == user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn update_password_hash(&self, id: i32, hashed_password: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(stored) = users.iter_mut().find(|u| u.id == id) {
            stored.hashed_password = hashed_password.to_string();
        }
        Ok(())
    }

    async fn delete_by_telegram_id(&self, telegram_id: i64) -> AppResult<u64> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.telegram_id != telegram_id);
        Ok((before - users.len()) as u64)
    }
}

struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    fn new() -> Self {
        Self {
            courses: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, course: NewCourse) -> AppResult<Course> {
        let mut courses = self.courses.write().await;
        let course = Course {
            id: courses.len() as i32 + 1,
            name: course.name,
            start_date: course.start_date,
            end_date: course.end_date,
            people_count: course.people_count,
        };
        courses.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Course>> {
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, course: &Course) -> AppResult<()> {
        let mut courses = self.courses.write().await;
        if let Some(stored) = courses.iter_mut().find(|c| c.id == course.id) {
            *stored = course.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        Ok((before - courses.len()) as u64)
    }
}

struct InMemoryGradeRepository {
    grades: RwLock<Vec<Grade>>,
}

impl InMemoryGradeRepository {
    fn new() -> Self {
        Self {
            grades: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GradeRepository for InMemoryGradeRepository {
    async fn create(&self, grade: NewGrade) -> AppResult<Grade> {
        let mut grades = self.grades.write().await;
        let grade = Grade {
            id: grades.len() as i32 + 1,
            course_id: grade.course_id,
            user_id: grade.user_id,
            grade: grade.grade,
            quiz_number: grade.quiz_number,
            date: grade.date,
            time_completion: grade.time_completion,
        };
        grades.push(grade.clone());
        Ok(grade)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Grade>> {
        Ok(self.grades.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_unique_key(
        &self,
        course_id: i32,
        user_id: i32,
        quiz_number: i32,
    ) -> AppResult<Option<Grade>> {
        Ok(self
            .grades
            .read()
            .await
            .iter()
            .find(|g| {
                g.course_id == course_id && g.user_id == user_id && g.quiz_number == quiz_number
            })
            .cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> AppResult<Vec<Grade>> {
        let grades = self.grades.read().await;
        Ok(grades
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn quiz_numbers_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<i32>> {
        let mut numbers: Vec<i32> = self
            .grades
            .read()
            .await
            .iter()
            .filter(|g| g.course_id == course_id && g.user_id == user_id)
            .map(|g| g.quiz_number)
            .collect();
        numbers.sort_unstable();
        Ok(numbers)
    }

    async fn grades_for(&self, course_id: i32, user_id: i32) -> AppResult<Vec<Grade>> {
        Ok(self
            .grades
            .read()
            .await
            .iter()
            .filter(|g| g.course_id == course_id && g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, grade: &Grade) -> AppResult<()> {
        let mut grades = self.grades.write().await;
        if let Some(stored) = grades.iter_mut().find(|g| g.id == grade.id) {
            *stored = grade.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut grades = self.grades.write().await;
        let before = grades.len();
        grades.retain(|g| g.id != id);
        Ok((before - grades.len()) as u64)
    }
}

struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
}

impl InMemoryQuizRepository {
    fn new() -> Self {
        Self {
            quizzes: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes.write().await.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_all(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_doc_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_number(&self, course_id: i32, quiz_number: i32) -> AppResult<Option<Quiz>> {
        Ok(self
            .quizzes
            .read()
            .await
            .iter()
            .find(|q| q.course_id == course_id && q.quiz_number == quiz_number)
            .cloned())
    }

    async fn course_overview(&self, course_id: i32) -> AppResult<Vec<QuizOverview>> {
        let mut entries: Vec<QuizOverview> = self
            .quizzes
            .read()
            .await
            .iter()
            .filter(|q| q.course_id == course_id)
            .map(|q| QuizOverview {
                quiz_number: q.quiz_number,
                is_active: q.is_active,
            })
            .collect();
        entries.sort_by_key(|e| e.quiz_number);
        Ok(entries)
    }

    async fn replace(&self, course_id: i32, quiz_number: i32, quiz: &Quiz) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(stored) = quizzes
            .iter_mut()
            .find(|q| q.course_id == course_id && q.quiz_number == quiz_number)
        else {
            return Ok(false);
        };

        let id = stored.id.clone();
        *stored = quiz.clone();
        stored.id = id;
        Ok(true)
    }

    async fn push_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        question: &Question,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(stored) = quizzes
            .iter_mut()
            .find(|q| q.course_id == course_id && q.quiz_number == quiz_number)
        else {
            return Ok(false);
        };

        stored.questions.push(question.clone());
        Ok(true)
    }

    async fn set_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        question: &Question,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(stored) = quizzes
            .iter_mut()
            .find(|q| q.course_id == course_id && q.quiz_number == quiz_number)
        else {
            return Ok(false);
        };

        if index < stored.questions.len() {
            stored.questions[index] = question.clone();
        }
        Ok(true)
    }

    async fn set_question_answers(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        answers: &[AnswerOption],
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        let Some(stored) = quizzes
            .iter_mut()
            .find(|q| q.course_id == course_id && q.quiz_number == quiz_number)
        else {
            return Ok(false);
        };

        if index < stored.questions.len() {
            stored.questions[index].answer = answers.to_vec();
        }
        Ok(true)
    }

    async fn delete(&self, course_id: i32, quiz_number: i32) -> AppResult<u64> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|q| !(q.course_id == course_id && q.quiz_number == quiz_number));
        Ok((before - quizzes.len()) as u64)
    }

    async fn shift_numbers_down(&self, course_id: i32, quiz_number: i32) -> AppResult<u64> {
        let mut quizzes = self.quizzes.write().await;
        let mut modified = 0;
        for quiz in quizzes
            .iter_mut()
            .filter(|q| q.course_id == course_id && q.quiz_number > quiz_number)
        {
            quiz.quiz_number -= 1;
            modified += 1;
        }
        Ok(modified)
    }
}

fn user_request(username: &str, telegram_id: i64) -> CreateUserRequest {
    CreateUserRequest {
        telegram_id,
        name: "Test".to_string(),
        surname: "User".to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        course_id: Some(1),
        role: UserRole::Student,
        password: None,
    }
}

fn course_request(name: &str) -> CreateCourseRequest {
    CreateCourseRequest {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
        people_count: 25,
    }
}

fn grade_request(course_id: i32, user_id: i32, quiz_number: i32) -> CreateGradeRequest {
    CreateGradeRequest {
        course_id,
        user_id,
        grade: 87.5,
        quiz_number,
        date: Utc::now(),
        time_completion: 312.4,
    }
}

fn question(text: &str) -> Question {
    Question {
        image_url: None,
        image_key: None,
        question: text.to_string(),
        answer: vec![
            AnswerOption(true, "yes".to_string()),
            AnswerOption(false, "no".to_string()),
        ],
        explanation: None,
    }
}

fn quiz(course_id: i32, quiz_number: i32) -> Quiz {
    Quiz {
        id: format!("{:024x}", (course_id as u64) << 16 | quiz_number as u64),
        course_id,
        quiz_number,
        questions: vec![question(&format!("question for quiz {}", quiz_number))],
        time_for_completion: 600,
        is_active: true,
    }
}

#[actix_rt::test]
async fn test_duplicate_username_is_rejected_and_not_written() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(repository.clone());

    service.create_user(user_request("ada", 1)).await.unwrap();
    let result = service.create_user(user_request("ada", 2)).await;

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(repository.list(0, 100).await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_duplicate_course_name_leaves_one_row() {
    let repository = Arc::new(InMemoryCourseRepository::new());
    let service = CourseService::new(repository.clone());

    service.create_course(course_request("X")).await.unwrap();
    let result = service.create_course(course_request("X")).await;

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    let courses = repository.list(0, 100).await.unwrap();
    assert_eq!(courses.iter().filter(|c| c.name == "X").count(), 1);
}

#[actix_rt::test]
async fn test_duplicate_grade_key_is_rejected() {
    let repository = Arc::new(InMemoryGradeRepository::new());
    let service = GradeService::new(repository.clone());

    service.create_grade(grade_request(1, 2, 3)).await.unwrap();
    let result = service.create_grade(grade_request(1, 2, 3)).await;

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(repository.list(0, 100).await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_grade_filtered_reads() {
    let repository = Arc::new(InMemoryGradeRepository::new());
    let service = GradeService::new(repository.clone());

    service.create_grade(grade_request(1, 2, 1)).await.unwrap();
    service.create_grade(grade_request(1, 2, 3)).await.unwrap();
    service.create_grade(grade_request(1, 9, 2)).await.unwrap();

    assert_eq!(
        service.completed_quiz_numbers(1, 2).await.unwrap(),
        vec![1, 3]
    );
    assert_eq!(service.progress(1, 2).await.unwrap().len(), 2);
    assert_eq!(service.progress(1, 9).await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_partial_course_update_keeps_other_fields() {
    let repository = Arc::new(InMemoryCourseRepository::new());
    let service = CourseService::new(repository.clone());

    let created = service.create_course(course_request("Rust 101")).await.unwrap();

    let updated = service
        .update_course(
            created.id,
            UpdateCourseRequest {
                name: Some("Rust 102".to_string()),
                start_date: None,
                end_date: None,
                people_count: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Rust 102");
    assert_eq!(updated.start_date, created.start_date);
    assert_eq!(updated.end_date, created.end_date);
    assert_eq!(updated.people_count, created.people_count);
}

async fn registered_user_service() -> (Arc<InMemoryUserRepository>, UserService) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(repository.clone());

    let mut request = user_request("ada", 1);
    request.password = Some("correct horse battery staple".to_string());
    service.create_user(request).await.unwrap();

    (repository, service)
}

#[actix_rt::test]
async fn test_login_with_correct_credentials() {
    let (_, service) = registered_user_service().await;

    let user = service
        .authenticate(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "ada");
}

#[actix_rt::test]
async fn test_login_falls_back_to_username() {
    let (_, service) = registered_user_service().await;

    let user = service
        .authenticate(&LoginRequest {
            email: "ada".to_string(),
            password: "correct horse battery staple".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, "ada@example.com");
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let (_, service) = registered_user_service().await;

    let wrong_password = service
        .authenticate(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    let unknown_user = service
        .authenticate(&LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        })
        .await;

    assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
    assert!(matches!(unknown_user, Err(AppError::InvalidCredentials)));
    let (wrong_password, unknown_user) = (wrong_password.unwrap_err(), unknown_user.unwrap_err());
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[actix_rt::test]
async fn test_login_rejects_inactive_account() {
    let (repository, service) = registered_user_service().await;

    let mut user = repository.find_by_username("ada").await.unwrap().unwrap();
    user.is_active = false;
    repository.update(&user).await.unwrap();

    let result = service
        .authenticate(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[actix_rt::test]
async fn test_login_upgrades_outdated_hash() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(repository.clone());

    // Stored with the bcrypt minimum cost, below the current default.
    let old_hash = bcrypt::hash("secret", 4).unwrap();
    repository
        .create(NewUser {
            telegram_id: 1,
            name: "Test".to_string(),
            surname: "User".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            hashed_password: old_hash.clone(),
            role: UserRole::Student,
            course_id: None,
            is_active: true,
            is_superuser: false,
            is_verified: false,
        })
        .await
        .unwrap();

    service
        .authenticate(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let stored = repository.find_by_username("ada").await.unwrap().unwrap();
    assert_ne!(stored.hashed_password, old_hash);
    assert!(bcrypt::verify("secret", &stored.hashed_password).unwrap());
}

#[actix_rt::test]
async fn test_account_without_password_cannot_login() {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(repository.clone());

    service.create_user(user_request("ada", 1)).await.unwrap();

    let result = service
        .authenticate(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[actix_rt::test]
async fn test_quiz_create_rejects_duplicate_number() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();
    let result = service.create_quiz(quiz(1, 1)).await;

    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(repository.find_all(100).await.unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_quiz_delete_renumbers_remaining() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();
    service.create_quiz(quiz(1, 2)).await.unwrap();
    let third = service.create_quiz(quiz(1, 3)).await.unwrap();
    // A quiz in another course must not be renumbered.
    service.create_quiz(quiz(2, 3)).await.unwrap();

    service.delete_quiz(1, 2).await.unwrap();

    let overview = service.course_overview(1).await.unwrap();
    let numbers: Vec<i32> = overview.iter().map(|e| e.quiz_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    // Old #3 is now #2, same document.
    let renumbered = service.get_quiz_by_number(1, 2).await.unwrap();
    assert_eq!(renumbered.id, third.id);

    let untouched = service.get_quiz_by_number(2, 3).await.unwrap();
    assert_eq!(untouched.quiz_number, 3);
}

#[actix_rt::test]
async fn test_quiz_delete_missing_is_not_found() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository);

    let result = service.delete_quiz(1, 7).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn test_answers_update_out_of_range_leaves_document_unchanged() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    let created = service.create_quiz(quiz(1, 1)).await.unwrap();

    let result = service
        .update_question_answers(1, 1, 5, vec![AnswerOption(true, "maybe".to_string())])
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    let stored = service.get_quiz_by_number(1, 1).await.unwrap();
    assert_eq!(stored, created);
}

#[actix_rt::test]
async fn test_answers_update_in_range() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();

    let answers = vec![
        AnswerOption(false, "yes".to_string()),
        AnswerOption(true, "no".to_string()),
    ];
    let updated = service
        .update_question_answers(1, 1, 0, answers.clone())
        .await
        .unwrap();

    assert_eq!(updated.questions[0].answer, answers);
    let stored = service.get_quiz_by_number(1, 1).await.unwrap();
    assert_eq!(stored.questions[0].answer, answers);
}

#[actix_rt::test]
async fn test_question_replace_bounds_checked() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();

    let result = service.update_question(1, 1, 9, question("replacement")).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));

    let updated = service
        .update_question(1, 1, 0, question("replacement"))
        .await
        .unwrap();
    assert_eq!(updated.questions[0].question, "replacement");
}

#[actix_rt::test]
async fn test_add_question_appends() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();

    let updated = service.add_question(1, 1, question("extra")).await.unwrap();
    assert_eq!(updated.questions.len(), 2);
    assert_eq!(updated.questions[1].question, "extra");
}

#[actix_rt::test]
async fn test_quiz_full_update_checks_number_uniqueness() {
    let repository = Arc::new(InMemoryQuizRepository::new());
    let service = QuizService::new(repository.clone());

    service.create_quiz(quiz(1, 1)).await.unwrap();
    service.create_quiz(quiz(1, 2)).await.unwrap();

    // Renumbering quiz 1 onto the existing number 2 must be rejected.
    let mut moved = quiz(1, 2);
    moved.time_for_completion = 900;
    let result = service.update_quiz(1, 1, moved).await;
    assert!(matches!(result, Err(AppError::AlreadyExists(_))));

    // Replacing in place keeps the stored document id.
    let original = service.get_quiz_by_number(1, 1).await.unwrap();
    let mut replacement = quiz(1, 1);
    replacement.time_for_completion = 900;
    let updated = service.update_quiz(1, 1, replacement).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.time_for_completion, 900);
}
