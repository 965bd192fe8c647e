use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, CreateQuestionResponse, DeleteQuestionResponse, PageQuery,
        QuestionListResponse, QuestionResponse, SearchQuestionsPayload, SearchQuestionsResponse,
    },
    error::{Error, Result},
    extract::{AppJson, AppPath, AppQuery},
    models::category::category_map,
    utils::pagination::paginate,
    AppState,
};

const LISTING_CATEGORY: &str = "History";
const SEARCH_CATEGORY: &str = "Entertainment";

#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 10 questions per page")
    ),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "The page holds no questions")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<impl IntoResponse> {
    let questions = state.store.list_questions().await?;
    let page = paginate(query.page(), &questions);
    if page.is_empty() {
        return Err(Error::NotFound(format!("Page {} holds no questions", query.page())));
    }

    let categories = state.store.list_categories().await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.iter().map(QuestionResponse::from).collect(),
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: LISTING_CATEGORY.to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found"),
        (status = 422, description = "Question could not be deleted")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<i32>,
) -> Result<impl IntoResponse> {
    let question = state
        .store
        .get_question(question_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Question {} does not exist", question_id)))?;

    let deleted = state
        .store
        .delete_question(question.id)
        .await
        .map_err(|e| Error::Unprocessable(format!("Deleting question {} failed: {}", question.id, e)))?;
    if !deleted {
        return Err(Error::NotFound(format!("Question {} does not exist", question.id)));
    }

    tracing::info!(question_id = question.id, "question deleted");
    Ok(Json(DeleteQuestionResponse {
        success: true,
        question_id: question.id,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Missing fields or the question could not be stored")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let new_question = payload.into_new_question()?;

    let question = state
        .store
        .insert_question(new_question)
        .await
        .map_err(|e| Error::Unprocessable(format!("Storing question failed: {}", e)))?;

    tracing::info!(question_id = question.id, category = question.category, "question created");
    Ok(Json(CreateQuestionResponse::from(question)))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsPayload,
    params(
        ("page" = Option<i64>, Query, description = "Page number")
    ),
    responses(
        (status = 200, description = "Questions whose text contains the term", body = SearchQuestionsResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 404, description = "Empty search term")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(payload): AppJson<Option<SearchQuestionsPayload>>,
) -> Result<impl IntoResponse> {
    // a `null` body carries no term, same as `{}`
    let term = payload
        .and_then(|payload| payload.search_term)
        .filter(|term| !term.is_empty())
        .ok_or_else(|| Error::NotFound("Empty search term".to_string()))?;

    let matches = state.store.search_questions(&term).await?;
    Ok(Json(SearchQuestionsResponse {
        success: true,
        questions: paginate(query.page(), &matches)
            .iter()
            .map(QuestionResponse::from)
            .collect(),
        total_questions: matches.len(),
        current_category: SEARCH_CATEGORY.to_string(),
    }))
}
