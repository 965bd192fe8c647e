pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    dto::{category_dto, question_dto, quiz_dto},
    middleware::{cors::trivia_cors, fallback},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        categories::list_categories,
        categories::list_category_questions,
        questions::list_questions,
        questions::create_question,
        questions::delete_question,
        questions::search_questions,
        quizzes::play_quiz,
    ),
    components(schemas(
        health::HealthResponse,
        category_dto::CategoryListResponse,
        category_dto::CategoryQuestionsResponse,
        question_dto::QuestionResponse,
        question_dto::QuestionListResponse,
        question_dto::CreateQuestionPayload,
        question_dto::CreateQuestionResponse,
        question_dto::DeleteQuestionResponse,
        question_dto::SearchQuestionsPayload,
        question_dto::SearchQuestionsResponse,
        quiz_dto::QuizPayload,
        quiz_dto::QuizCategoryPayload,
        quiz_dto::QuizResponse,
    ))
)]
pub struct ApiDoc;

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// The full application: every endpoint plus the error-envelope, CORS and
/// tracing layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(openapi))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(fallback::not_found)
        .with_state(state)
        .layer(axum::middleware::map_response(fallback::method_not_allowed))
        .layer(CatchPanicLayer::custom(fallback::panic_response))
        .layer(trivia_cors())
        .layer(TraceLayer::new_for_http())
}
