//! Port for the question record store.
//!
//! The store owns all [`Question`] instances and assigns identifiers.
//! The use cases only read (plus the single create path); update and
//! delete are never exercised. Transactional semantics belong to the
//! implementing adapter, not to this contract.

use chrono::{DateTime, Utc};
use polls_domain::{Question, QuestionId};

/// Port for creating and reading question records.
///
/// Reads return snapshots: the returned values are detached copies and
/// later store mutations do not affect them.
pub trait QuestionRepository: Send + Sync {
    /// Create a question with a store-assigned id and return it.
    fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Question;

    /// Snapshot of every stored question, in insertion order.
    fn all(&self) -> Vec<Question>;

    /// Look up a question by id, `None` when absent.
    fn find(&self, id: QuestionId) -> Option<Question>;
}
