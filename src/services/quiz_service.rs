use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerOption, Question, Quiz},
    models::dto::response::QuizOverview,
    repositories::QuizRepository,
};

const LIST_LIMIT: i64 = 100;

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        if self
            .repository
            .find_by_number(quiz.course_id, quiz.quiz_number)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Quiz #{} already exists in this course",
                quiz.quiz_number
            )));
        }

        self.repository.insert(quiz).await
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.repository.find_all(LIST_LIMIT).await
    }

    pub async fn get_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_doc_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    pub async fn get_quiz_by_number(&self, course_id: i32, quiz_number: i32) -> AppResult<Quiz> {
        self.repository
            .find_by_number(course_id, quiz_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    pub async fn course_overview(&self, course_id: i32) -> AppResult<Vec<QuizOverview>> {
        self.repository.course_overview(course_id).await
    }

    pub async fn add_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        question: Question,
    ) -> AppResult<Quiz> {
        let matched = self
            .repository
            .push_question(course_id, quiz_number, &question)
            .await?;
        if !matched {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        self.get_quiz_by_number(course_id, quiz_number).await
    }

    /// Full-document replace. When the quiz number (or course) changes, the
    /// (course_id, quiz_number) uniqueness is re-checked first. The stored
    /// document id always survives the replace.
    pub async fn update_quiz(
        &self,
        course_id: i32,
        quiz_number: i32,
        mut quiz: Quiz,
    ) -> AppResult<Quiz> {
        let existing = self
            .repository
            .find_by_number(course_id, quiz_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let moves = quiz.course_id != course_id || quiz.quiz_number != quiz_number;
        if moves
            && self
                .repository
                .find_by_number(quiz.course_id, quiz.quiz_number)
                .await?
                .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Quiz #{} already exists in this course",
                quiz.quiz_number
            )));
        }

        quiz.id = existing.id;
        let matched = self.repository.replace(course_id, quiz_number, &quiz).await?;
        if !matched {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        Ok(quiz)
    }

    pub async fn update_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        question_number: usize,
        question: Question,
    ) -> AppResult<Quiz> {
        let mut quiz = self.get_quiz_by_number(course_id, quiz_number).await?;
        if question_number >= quiz.questions.len() {
            return Err(AppError::ValidationError(
                "Invalid question number".to_string(),
            ));
        }

        self.repository
            .set_question(course_id, quiz_number, question_number, &question)
            .await?;

        quiz.questions[question_number] = question;
        Ok(quiz)
    }

    pub async fn update_question_answers(
        &self,
        course_id: i32,
        quiz_number: i32,
        question_number: usize,
        answers: Vec<AnswerOption>,
    ) -> AppResult<Quiz> {
        let mut quiz = self.get_quiz_by_number(course_id, quiz_number).await?;
        if question_number >= quiz.questions.len() {
            return Err(AppError::ValidationError(
                "Invalid question number".to_string(),
            ));
        }

        self.repository
            .set_question_answers(course_id, quiz_number, question_number, &answers)
            .await?;

        quiz.questions[question_number].answer = answers;
        Ok(quiz)
    }

    /// Deletes the quiz, then closes the numbering gap by decrementing every
    /// higher-numbered quiz in the course. The two operations are not atomic;
    /// a crash in between leaves a gap.
    pub async fn delete_quiz(&self, course_id: i32, quiz_number: i32) -> AppResult<String> {
        let deleted = self.repository.delete(course_id, quiz_number).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }

        let shifted = self
            .repository
            .shift_numbers_down(course_id, quiz_number)
            .await?;
        log::debug!(
            "Deleted quiz #{} in course {}, renumbered {} quizzes",
            quiz_number,
            course_id,
            shifted
        );

        Ok("Quiz successfully deleted".to_string())
    }
}
