use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::deserializers::{deserialize_loose_id, deserialize_loose_ids};
use crate::dto::question_dto::QuestionResponse;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizPayload {
    #[serde(default, deserialize_with = "deserialize_loose_ids")]
    pub previous_questions: Vec<i32>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryPayload>,
}

impl QuizPayload {
    pub fn category_id(&self) -> Option<i32> {
        self.quiz_category.as_ref().and_then(|category| category.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryPayload {
    #[serde(default, deserialize_with = "deserialize_loose_id")]
    pub id: Option<i32>,
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionResponse,
}
