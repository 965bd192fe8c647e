use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::quiz_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    extract::AppJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "A question not in previous_questions", body = QuizResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 404, description = "Unknown category or no questions left")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizPayload>,
) -> Result<impl IntoResponse> {
    let category_id = payload
        .category_id()
        .ok_or_else(|| Error::NotFound("Quiz category is missing an id".to_string()))?;

    let question = state
        .quiz_service
        .next_question(category_id, &payload.previous_questions)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}
