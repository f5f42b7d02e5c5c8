//! Latest questions use case.
//!
//! Backs the index surface: snapshots the store and returns the
//! published questions newest-first. An empty result means the caller
//! renders the "No polls are available." state.

use crate::ports::clock::Clock;
use crate::ports::question_repository::QuestionRepository;
use polls_domain::{Question, latest_questions};
use std::sync::Arc;
use tracing::debug;

/// Use case listing every published question, newest first.
///
/// Future-dated questions are excluded. Ties on `pub_date` keep
/// insertion order.
pub struct LatestQuestionsUseCase {
    repository: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl LatestQuestionsUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Execute the query against a snapshot of the store.
    pub fn execute(&self) -> Vec<Question> {
        let now = self.clock.now();
        let snapshot = self.repository.all();
        let latest = latest_questions(&snapshot, now);
        debug!(
            "Listed {} of {} questions as published at {}",
            latest.len(),
            snapshot.len(),
            now
        );
        latest
    }
}
