//! Pure publication queries over a question snapshot
//!
//! Both queries are stateless, single-shot evaluations over a snapshot
//! of the store and a point-in-time clock value. Callers are expected
//! to obtain the snapshot and `now` from their ports and pass them in.

use super::entities::{Question, QuestionId};
use chrono::{DateTime, Utc};

/// Questions published at `now`, newest first
///
/// Filters out future-dated questions and sorts descending by
/// `pub_date`. The sort is stable, so questions sharing a `pub_date`
/// keep their insertion order.
pub fn latest_questions(questions: &[Question], now: DateTime<Utc>) -> Vec<Question> {
    let mut published: Vec<Question> = questions
        .iter()
        .filter(|q| q.is_published(now))
        .cloned()
        .collect();
    published.sort_by(|a, b| b.pub_date().cmp(&a.pub_date()));
    published
}

/// Look up a single published question by id
///
/// Returns `None` when no question has that id *or* when the matching
/// question is future-dated: an unpublished question must be
/// indistinguishable from a nonexistent one.
pub fn published_question(
    questions: &[Question],
    id: QuestionId,
    now: DateTime<Utc>,
) -> Option<&Question> {
    questions
        .iter()
        .find(|q| q.id() == id && q.is_published(now))
}
