//! Infrastructure layer for pollboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clock;
pub mod config;
pub mod store;

// Re-export commonly used types
pub use clock::{FixedClock, SystemClock};
pub use config::{ConfigLoader, FileBoardConfig, FileConfig, FileOutputConfig, FileSeedQuestion};
pub use store::InMemoryQuestionStore;
