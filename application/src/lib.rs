//! Application layer for pollboard
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{clock::Clock, question_repository::QuestionRepository};
pub use use_cases::add_question::{AddQuestionError, AddQuestionUseCase};
pub use use_cases::latest_questions::LatestQuestionsUseCase;
pub use use_cases::question_detail::{QuestionDetailError, QuestionDetailUseCase};
