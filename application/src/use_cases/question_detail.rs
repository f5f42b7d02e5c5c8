//! Question detail use case.
//!
//! Backs the detail surface: looks up a single question by id and only
//! surfaces it when it is published. A future-dated question is
//! reported exactly like a missing one, so external observers cannot
//! tell unpublished ids apart from nonexistent ones.

use crate::ports::clock::Clock;
use crate::ports::question_repository::QuestionRepository;
use polls_domain::{Question, QuestionId, published_question};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during a detail lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionDetailError {
    /// The id is absent or the question is not yet published.
    #[error("No published question with id {0}")]
    NotFound(QuestionId),
}

/// Use case fetching a single published question.
pub struct QuestionDetailUseCase {
    repository: Arc<dyn QuestionRepository>,
    clock: Arc<dyn Clock>,
}

impl QuestionDetailUseCase {
    pub fn new(repository: Arc<dyn QuestionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Execute the lookup against a snapshot of the store.
    ///
    /// The caller surfaces [`QuestionDetailError::NotFound`] as its
    /// not-found response; it is not retried and not recoverable here.
    pub fn execute(&self, id: QuestionId) -> Result<Question, QuestionDetailError> {
        let now = self.clock.now();
        let snapshot = self.repository.all();
        match published_question(&snapshot, id, now) {
            Some(question) => Ok(question.clone()),
            None => {
                debug!("Question {} absent or unpublished at {}", id, now);
                Err(QuestionDetailError::NotFound(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockQuestionRepository {
        questions: Mutex<Vec<Question>>,
    }

    impl MockQuestionRepository {
        fn new() -> Self {
            Self {
                questions: Mutex::new(Vec::new()),
            }
        }
    }

    impl QuestionRepository for MockQuestionRepository {
        fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Question {
            let mut questions = self.questions.lock().unwrap();
            let id = QuestionId::new(questions.len() as u64 + 1);
            let question = Question::new(id, question_text, pub_date);
            questions.push(question.clone());
            question
        }

        fn all(&self) -> Vec<Question> {
            self.questions.lock().unwrap().clone()
        }

        fn find(&self, id: QuestionId) -> Option<Question> {
            self.questions
                .lock()
                .unwrap()
                .iter()
                .find(|q| q.id() == id)
                .cloned()
        }
    }

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn create_question(repo: &MockQuestionRepository, question_text: &str, days: i64) -> Question {
        repo.create(question_text, fixed_now() + Duration::days(days))
    }

    fn use_case(repo: Arc<MockQuestionRepository>) -> QuestionDetailUseCase {
        QuestionDetailUseCase::new(repo, Arc::new(StoppedClock(fixed_now())))
    }

    // ==================== Tests ====================

    #[test]
    fn test_future_question() {
        let repo = Arc::new(MockQuestionRepository::new());
        let future = create_question(&repo, "Future question.", 5);
        let result = use_case(repo).execute(future.id());
        assert_eq!(result, Err(QuestionDetailError::NotFound(future.id())));
    }

    #[test]
    fn test_past_question() {
        let repo = Arc::new(MockQuestionRepository::new());
        let past = create_question(&repo, "Past question.", -5);
        let found = use_case(repo).execute(past.id()).unwrap();
        assert_eq!(found.question_text(), "Past question.");
    }

    #[test]
    fn test_missing_id() {
        let repo = Arc::new(MockQuestionRepository::new());
        create_question(&repo, "Past question.", -5);
        let missing = QuestionId::new(99);
        let result = use_case(repo).execute(missing);
        assert_eq!(result, Err(QuestionDetailError::NotFound(missing)));
    }

    #[test]
    fn test_future_question_error_matches_missing_id_error() {
        // An unpublished question must be indistinguishable from an
        // absent one apart from the id echoed in the message.
        let repo = Arc::new(MockQuestionRepository::new());
        let future = create_question(&repo, "Future question.", 5);
        let use_case = use_case(repo);

        let unpublished = use_case.execute(future.id()).unwrap_err();
        let absent = use_case.execute(QuestionId::new(99)).unwrap_err();
        assert!(matches!(unpublished, QuestionDetailError::NotFound(_)));
        assert!(matches!(absent, QuestionDetailError::NotFound(_)));
    }

    #[test]
    fn test_not_found_display() {
        let error = QuestionDetailError::NotFound(QuestionId::new(7));
        assert_eq!(error.to_string(), "No published question with id 7");
    }
}
