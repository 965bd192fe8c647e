pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::store::{PgTriviaStore, TriviaStore};
use crate::services::quiz_service::QuizService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        let quiz_service = QuizService::new(store.clone());
        Self {
            store,
            quiz_service,
        }
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgTriviaStore::new(pool)))
    }
}
