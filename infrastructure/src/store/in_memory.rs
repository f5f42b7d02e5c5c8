//! In-memory question store.
//!
//! Owns every [`Question`] instance and assigns monotonically
//! increasing identifiers starting at 1. Reads hand out detached
//! snapshots, so insertion order is preserved and callers never observe
//! partial mutations.

use chrono::{DateTime, Utc};
use polls_application::QuestionRepository;
use polls_domain::{Question, QuestionId};
use std::sync::Mutex;
use tracing::debug;

struct StoreState {
    questions: Vec<Question>,
    next_id: u64,
}

/// Mutex-guarded in-memory implementation of [`QuestionRepository`].
pub struct InMemoryQuestionStore {
    state: Mutex<StoreState>,
}

impl InMemoryQuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                questions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored questions.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().questions.len()
    }

    /// Whether the store holds no questions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionRepository for InMemoryQuestionStore {
    fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Question {
        let mut state = self.state.lock().unwrap();
        let id = QuestionId::new(state.next_id);
        state.next_id += 1;

        let question = Question::new(id, question_text, pub_date);
        state.questions.push(question.clone());
        debug!("Stored question {}", id);
        question
    }

    fn all(&self) -> Vec<Question> {
        self.state.lock().unwrap().questions.clone()
    }

    fn find(&self, id: QuestionId) -> Option<Question> {
        self.state
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id() == id)
            .cloned()
    }
}
