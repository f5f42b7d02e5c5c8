//! Presentation layer for pollboard
//!
//! This crate contains the CLI definition and console output
//! formatting for the index, detail, and not-found surfaces.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
