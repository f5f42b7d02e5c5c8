//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileBoardConfig, FileConfig, FileOutputConfig, FileSeedQuestion};
pub use loader::ConfigLoader;
