//! Question entity and publication queries

pub mod entities;
pub mod queries;

pub use entities::{Question, QuestionId};
pub use queries::{latest_questions, published_question};
