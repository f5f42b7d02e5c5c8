//! Domain layer for pollboard
//!
//! This crate contains the core business logic: the [`Question`] entity
//! and the pure publication queries. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Publication window
//!
//! A question is *published* iff its `pub_date` is not in the future
//! relative to the evaluation time. The index and detail surfaces only
//! ever see published questions.
//!
//! ## Recency window
//!
//! A question was *published recently* iff its `pub_date` falls within
//! the trailing 24-hour interval ending at the evaluation time.

pub mod config;
pub mod question;

// Re-export commonly used types
pub use config::OutputFormat;
pub use question::{
    entities::{Question, QuestionId},
    queries::{latest_questions, published_question},
};
