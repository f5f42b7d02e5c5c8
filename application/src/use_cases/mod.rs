//! Use cases

pub mod add_question;
pub mod latest_questions;
pub mod question_detail;

pub use add_question::{AddQuestionError, AddQuestionUseCase};
pub use latest_questions::LatestQuestionsUseCase;
pub use question_detail::{QuestionDetailError, QuestionDetailUseCase};
