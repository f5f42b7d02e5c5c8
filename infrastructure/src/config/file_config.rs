//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use polls_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Board settings
    pub board: FileBoardConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Questions created into the store at startup
    pub seed: Vec<FileSeedQuestion>,
}

/// `[board]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Header shown above the index listing
    pub title: String,
}

impl Default for FileBoardConfig {
    fn default() -> Self {
        Self {
            title: "Polls".to_string(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format name ("text" or "json")
    pub format: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl FileOutputConfig {
    /// Parse the configured format, falling back to text on unknown names.
    pub fn parse_format(&self) -> OutputFormat {
        match self.format.to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => {
                warn!("Unknown output.format '{}', using text", other);
                OutputFormat::Text
            }
        }
    }
}

/// One `[[seed]]` entry: a question created at startup with a
/// publication offset in whole days from the current time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSeedQuestion {
    /// The question text
    pub text: String,
    /// Day offset from now (negative = already published)
    #[serde(default)]
    pub days: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.board.title, "Polls");
        assert_eq!(config.output.format, "text");
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_parse_format() {
        let mut output = FileOutputConfig::default();
        assert_eq!(output.parse_format(), OutputFormat::Text);

        output.format = "JSON".to_string();
        assert_eq!(output.parse_format(), OutputFormat::Json);

        output.format = "yaml".to_string();
        assert_eq!(output.parse_format(), OutputFormat::Text);
    }

    #[test]
    fn test_deserialize_seed_entries() {
        let config: FileConfig = toml::from_str(
            r#"
            [board]
            title = "Office polls"

            [[seed]]
            text = "Past question."
            days = -5

            [[seed]]
            text = "No offset."
            "#,
        )
        .unwrap();

        assert_eq!(config.board.title, "Office polls");
        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].days, -5);
        assert_eq!(config.seed[1].days, 0);
    }
}
