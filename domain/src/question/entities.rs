//! Question entity and identifier value object

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, store-assigned identifier for a [`Question`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        QuestionId(value)
    }
}

/// A poll question with a publication timestamp (Entity)
///
/// `pub_date` is set once at creation and never mutated by the query
/// logic. Identity is the store-assigned [`QuestionId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl Question {
    /// Create a new question
    pub fn new(id: QuestionId, question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Get the identifier
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the question text
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Get the publication timestamp
    pub fn pub_date(&self) -> DateTime<Utc> {
        self.pub_date
    }

    /// Whether the question is published at `now`
    ///
    /// Published means `pub_date <= now`; future-dated questions are
    /// invisible to the index and detail surfaces.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Whether the question was published within the last day
    ///
    /// True iff `now - 1 day < pub_date <= now`: strictly newer than
    /// 24 hours ago and not in the future.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        let day_ago = now - Duration::days(1);
        day_ago < self.pub_date && self.pub_date <= now
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question_text)
    }
}
