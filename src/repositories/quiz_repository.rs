use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, to_document, Document},
    options::FindOptions,
    Collection,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{AnswerOption, Question, Quiz},
    models::dto::response::QuizOverview,
};

#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_all(&self, limit: i64) -> AppResult<Vec<Quiz>>;
    async fn find_by_doc_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_by_number(&self, course_id: i32, quiz_number: i32) -> AppResult<Option<Quiz>>;
    /// quiz_number/is_active projection over one course.
    async fn course_overview(&self, course_id: i32) -> AppResult<Vec<QuizOverview>>;
    /// Full-document replace under the (course_id, quiz_number) key, keeping
    /// the stored document id. Returns false when nothing matched.
    async fn replace(&self, course_id: i32, quiz_number: i32, quiz: &Quiz) -> AppResult<bool>;
    async fn push_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        question: &Question,
    ) -> AppResult<bool>;
    async fn set_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        question: &Question,
    ) -> AppResult<bool>;
    async fn set_question_answers(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        answers: &[AnswerOption],
    ) -> AppResult<bool>;
    async fn delete(&self, course_id: i32, quiz_number: i32) -> AppResult<u64>;
    /// Decrements quiz_number for every quiz in the course above `quiz_number`.
    async fn shift_numbers_down(&self, course_id: i32, quiz_number: i32) -> AppResult<u64>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    fn number_filter(course_id: i32, quiz_number: i32) -> Document {
        doc! { "course_id": course_id, "quiz_number": quiz_number }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_all(&self, limit: i64) -> AppResult<Vec<Quiz>> {
        let options = FindOptions::builder().limit(Some(limit)).build();
        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_doc_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_number(&self, course_id: i32, quiz_number: i32) -> AppResult<Option<Quiz>> {
        Ok(self
            .collection
            .find_one(Self::number_filter(course_id, quiz_number))
            .await?)
    }

    async fn course_overview(&self, course_id: i32) -> AppResult<Vec<QuizOverview>> {
        let options = FindOptions::builder()
            .projection(doc! { "quiz_number": 1, "is_active": 1, "_id": 0 })
            .sort(doc! { "quiz_number": 1 })
            .build();

        let cursor = self
            .collection
            .clone_with_type::<QuizOverview>()
            .find(doc! { "course_id": course_id })
            .with_options(options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn replace(&self, course_id: i32, quiz_number: i32, quiz: &Quiz) -> AppResult<bool> {
        let mut fields = to_document(quiz)?;
        fields.remove("_id"); // _id is immutable

        let result = self
            .collection
            .update_one(
                Self::number_filter(course_id, quiz_number),
                doc! { "$set": fields },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn push_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        question: &Question,
    ) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                Self::number_filter(course_id, quiz_number),
                doc! { "$push": { "questions": to_bson(question)? } },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn set_question(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        question: &Question,
    ) -> AppResult<bool> {
        let mut set = Document::new();
        set.insert(format!("questions.{}", index), to_bson(question)?);

        let result = self
            .collection
            .update_one(
                Self::number_filter(course_id, quiz_number),
                doc! { "$set": set },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn set_question_answers(
        &self,
        course_id: i32,
        quiz_number: i32,
        index: usize,
        answers: &[AnswerOption],
    ) -> AppResult<bool> {
        let mut set = Document::new();
        set.insert(format!("questions.{}.answer", index), to_bson(answers)?);

        let result = self
            .collection
            .update_one(
                Self::number_filter(course_id, quiz_number),
                doc! { "$set": set },
            )
            .await?;

        Ok(result.matched_count == 1)
    }

    async fn delete(&self, course_id: i32, quiz_number: i32) -> AppResult<u64> {
        let result = self
            .collection
            .delete_one(Self::number_filter(course_id, quiz_number))
            .await?;

        Ok(result.deleted_count)
    }

    async fn shift_numbers_down(&self, course_id: i32, quiz_number: i32) -> AppResult<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "course_id": course_id, "quiz_number": { "$gt": quiz_number } },
                doc! { "$inc": { "quiz_number": -1 } },
            )
            .await?;

        Ok(result.modified_count)
    }
}
