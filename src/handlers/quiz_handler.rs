use std::sync::Arc;

use actix_web::{delete, get, patch, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::{AnswerOption, Question, Quiz},
    models::dto::response::MessageResponse,
};

#[post("/quiz")]
pub async fn create_quiz(
    state: web::Data<Arc<AppState>>,
    quiz: web::Json<Quiz>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(quiz.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quiz")]
pub async fn list_quizzes(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

/// quiz_number/is_active overview of one course.
#[get("/quiz/course/{course_id}")]
pub async fn course_overview(
    state: web::Data<Arc<AppState>>,
    course_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let overview = state
        .quiz_service
        .course_overview(course_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(overview))
}

#[get("/quiz/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<Arc<AppState>>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/quiz/course/{course_id}/number/{quiz_number}")]
pub async fn get_quiz_by_number(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number) = path.into_inner();
    let quiz = state
        .quiz_service
        .get_quiz_by_number(course_id, quiz_number)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// Appends one question to the quiz's question list.
#[patch("/quiz/course/{course_id}/number/{quiz_number}")]
pub async fn add_question(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
    question: web::Json<Question>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number) = path.into_inner();
    let quiz = state
        .quiz_service
        .add_question(course_id, quiz_number, question.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/quiz/course/{course_id}/number/{quiz_number}")]
pub async fn update_quiz(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
    quiz: web::Json<Quiz>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number) = path.into_inner();
    let quiz = state
        .quiz_service
        .update_quiz(course_id, quiz_number, quiz.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// Replaces the answer list of one question, addressed by position.
#[put("/quiz/course/{course_id}/quiz/{quiz_number}/question/{question_number}/answers")]
pub async fn update_question_answers(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32, usize)>,
    answers: web::Json<Vec<AnswerOption>>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number, question_number) = path.into_inner();
    let quiz = state
        .quiz_service
        .update_question_answers(course_id, quiz_number, question_number, answers.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/quiz/course/{course_id}/quiz/{quiz_number}/question/{question_number}")]
pub async fn update_question(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32, usize)>,
    question: web::Json<Question>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number, question_number) = path.into_inner();
    let quiz = state
        .quiz_service
        .update_question(course_id, quiz_number, question_number, question.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quiz/course/{course_id}/number/{quiz_number}")]
pub async fn delete_quiz(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, AppError> {
    let (course_id, quiz_number) = path.into_inner();
    let message = state
        .quiz_service
        .delete_quiz(course_id, quiz_number)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}
