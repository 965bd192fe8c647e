use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        category_dto::{CategoryListResponse, CategoryQuestionsResponse},
        question_dto::{PageQuery, QuestionResponse},
    },
    error::{Error, Result},
    extract::{AppPath, AppQuery},
    models::category::category_map,
    utils::pagination::paginate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories keyed by id", body = CategoryListResponse),
        (status = 404, description = "No categories exist")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(Error::NotFound("No categories exist".to_string()));
    }

    let total = categories.len();
    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        ("page" = Option<i64>, Query, description = "Page number")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<impl IntoResponse> {
    let category = state
        .store
        .get_category(category_id)
        .await
        .map_err(|e| Error::NotFound(format!("Category lookup failed: {}", e)))?
        .ok_or_else(|| Error::NotFound(format!("Category {} does not exist", category_id)))?;

    let questions = state
        .store
        .questions_in_category(category.id)
        .await
        .map_err(|e| Error::NotFound(format!("Category questions lookup failed: {}", e)))?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(query.page(), &questions)
            .iter()
            .map(QuestionResponse::from)
            .collect(),
        total_questions: questions.len(),
        current_category: category.category_type,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::{json, Value as JsonValue};
    use tower::ServiceExt;

    use crate::database::store::MockTriviaStore;
    use crate::models::category::Category;
    use crate::AppState;

    fn app(store: MockTriviaStore) -> Router {
        Router::new()
            .route(
                "/categories/:category_id/questions",
                get(super::list_category_questions),
            )
            .with_state(AppState::new(Arc::new(store)))
    }

    async fn fetch(app: Router) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("GET")
            .uri("/categories/1/questions")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn failed_category_lookup_is_not_found() {
        let mut store = MockTriviaStore::new();
        store
            .expect_get_category()
            .returning(|_| Err(sqlx::Error::PoolTimedOut.into()));
        store.expect_questions_in_category().never();

        let (status, body) = fetch(app(store)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 404, "message": "resource not found" })
        );
    }

    #[tokio::test]
    async fn failed_question_lookup_is_not_found() {
        let mut store = MockTriviaStore::new();
        store.expect_get_category().returning(|id| {
            Ok(Some(Category {
                id,
                category_type: "Science".to_string(),
            }))
        });
        store
            .expect_questions_in_category()
            .returning(|_| Err(sqlx::Error::PoolClosed.into()));

        let (status, body) = fetch(app(store)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 404, "message": "resource not found" })
        );
    }
}
