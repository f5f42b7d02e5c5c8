//! Port definitions (implemented by the infrastructure layer)

pub mod clock;
pub mod question_repository;

pub use clock::Clock;
pub use question_repository::QuestionRepository;
