use std::collections::HashSet;
use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};

use crate::database::store::TriviaStore;
use crate::error::{Error, Result};
use crate::models::question::Question;

/// Quiz category id meaning "draw from every category".
pub const ANY_CATEGORY: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPool {
    Any,
    Category(i32),
}

impl QuizPool {
    pub fn from_category_id(id: i32) -> Self {
        if id == ANY_CATEGORY {
            QuizPool::Any
        } else {
            QuizPool::Category(id)
        }
    }

    fn admits(&self, question: &Question) -> bool {
        match self {
            QuizPool::Any => true,
            QuizPool::Category(id) => question.belongs_to(*id),
        }
    }
}

/// Picks one question from `pool` uniformly at random, skipping every id in
/// `previous`. `None` once the pool is exhausted.
pub fn select_quiz_question<'a, R>(
    pool: QuizPool,
    previous: &[i32],
    questions: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i32> = previous.iter().copied().collect();
    let candidates: Vec<&Question> = questions
        .iter()
        .filter(|question| pool.admits(question) && !seen.contains(&question.id))
        .collect();
    candidates.choose(rng).copied()
}

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Next unseen question for a quiz round over `category_id`.
    pub async fn next_question(&self, category_id: i32, previous: &[i32]) -> Result<Question> {
        let pool = QuizPool::from_category_id(category_id);
        let questions = match pool {
            QuizPool::Any => self.store.list_questions().await?,
            QuizPool::Category(id) => {
                if self.store.get_category(id).await?.is_none() {
                    return Err(Error::NotFound(format!("Category {} does not exist", id)));
                }
                self.store.questions_in_category(id).await?
            }
        };

        select_quiz_question(pool, previous, &questions, &mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| Error::NotFound("No questions left for this quiz".to_string()))
    }
}
