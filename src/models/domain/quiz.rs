use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

fn new_document_id() -> String {
    ObjectId::new().to_hex()
}

/// One answer option: (is_correct, text). Serializes as a two-element array,
/// which is also the shape stored in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption(pub bool, pub String);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    pub question: String,
    pub answer: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Document of the `quizzes` collection. (course_id, quiz_number) is unique
/// among documents of one course; the id is an ObjectId hex string assigned
/// on creation when the client does not supply one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(rename = "_id", alias = "id", default = "new_document_id")]
    pub id: String,
    pub course_id: i32,
    pub quiz_number: i32,
    pub questions: Vec<Question>,
    pub time_for_completion: i32,
    pub is_active: bool,
}

#[cfg(test)]
impl Quiz {
    pub fn test_quiz(course_id: i32, quiz_number: i32) -> Self {
        Quiz {
            id: new_document_id(),
            course_id,
            quiz_number,
            questions: vec![Question {
                image_url: None,
                image_key: None,
                question: "What is the capital of France?".to_string(),
                answer: vec![
                    AnswerOption(true, "Paris".to_string()),
                    AnswerOption(false, "Lyon".to_string()),
                ],
                explanation: None,
            }],
            time_for_completion: 600,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_option_serializes_as_pair() {
        let option = AnswerOption(true, "Paris".to_string());
        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(value, json!([true, "Paris"]));
    }

    #[test]
    fn test_quiz_gets_document_id_when_absent() {
        let quiz: Quiz = serde_json::from_value(json!({
            "course_id": 1,
            "quiz_number": 3,
            "questions": [],
            "time_for_completion": 300,
            "is_active": true
        }))
        .unwrap();

        assert_eq!(quiz.id.len(), 24);
        assert!(quiz.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_quiz_roundtrip_keeps_underscore_id() {
        let quiz = Quiz::test_quiz(1, 1);
        let value = serde_json::to_value(&quiz).unwrap();
        assert_eq!(value["_id"], json!(quiz.id));

        let back: Quiz = serde_json::from_value(value).unwrap();
        assert_eq!(back, quiz);
    }
}
