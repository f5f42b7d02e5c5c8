//! Add question use case.
//!
//! The only write path: creates a question whose `pub_date` is offset
//! from the current time by a whole number of days. Negative offsets
//! publish in the past, positive offsets schedule for the future.

use crate::ports::clock::Clock;
use crate::ports::question_repository::QuestionRepository;
use chrono::Duration;
use polls_domain::Question;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while adding a question.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddQuestionError {
    /// The day offset cannot be represented as a timestamp.
    #[error("Day offset {0} is out of range")]
    OffsetOutOfRange(i64),
}

/// Use case creating a question at `now + day_offset` days.
pub struct AddQuestionUseCase {
    repository: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl AddQuestionUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Create the question and return it with its store-assigned id.
    ///
    /// Offsets that overflow the duration or timestamp range are
    /// rejected instead of aborting.
    pub fn execute(
        &self,
        question_text: &str,
        day_offset: i64,
    ) -> Result<Question, AddQuestionError> {
        let offset = Duration::try_days(day_offset)
            .ok_or(AddQuestionError::OffsetOutOfRange(day_offset))?;
        let pub_date = self
            .clock
            .now()
            .checked_add_signed(offset)
            .ok_or(AddQuestionError::OffsetOutOfRange(day_offset))?;

        let question = self.repository.create(question_text, pub_date);
        info!(
            "Created question {} publishing at {}",
            question.id(),
            question.pub_date()
        );
        Ok(question)
    }
}
