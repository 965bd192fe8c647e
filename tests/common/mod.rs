#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_backend::{
    database::store::TriviaStore,
    error::Result,
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    routes, AppState,
};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

/// In-memory stand-in for the database, ordered by id like the real store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: i32, category_type: &str) -> Self {
        {
            let mut tables = self.tables.lock().unwrap();
            tables.categories.push(Category {
                id,
                category_type: category_type.to_string(),
            });
            tables.categories.sort_by_key(|c| c.id);
        }
        self
    }

    pub fn with_question(self, question: &str, answer: &str, category: i32, difficulty: i32) -> Self {
        {
            let mut tables = self.tables.lock().unwrap();
            tables.next_id += 1;
            let id = tables.next_id;
            tables.questions.push(Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            });
        }
        self
    }

    pub fn question_ids(&self) -> Vec<i32> {
        let tables = self.tables.lock().unwrap();
        tables.questions.iter().map(|q| q.id).collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.tables.lock().unwrap().questions.clone())
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let created = Question {
            id: tables.next_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.push(created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }
}

/// The standard six categories with a couple of questions each.
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_category(3, "Geography")
        .with_category(4, "History")
        .with_category(5, "Entertainment")
        .with_category(6, "Sports")
        .with_question("What is the heaviest organ in the human body?", "The Liver", 1, 4)
        .with_question("Who discovered penicillin?", "Alexander Fleming", 1, 3)
        .with_question("La Giaconda is better known as what?", "Mona Lisa", 2, 3)
        .with_question("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4)
        .with_question("What is the largest lake in Africa?", "Lake Victoria", 3, 2)
        .with_question("The Taj Mahal is located in which Indian city?", "Agra", 3, 2)
        .with_question("Who invented Peanut Butter?", "George Washington Carver", 4, 2)
        .with_question("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1)
        .with_question("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4)
        .with_question("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4)
        .with_question("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3)
        .with_question("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4)
}

pub fn app(store: MemoryStore) -> Router {
    routes::router(AppState::new(Arc::new(store)))
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp: Response = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &JsonValue) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
