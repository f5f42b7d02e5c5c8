//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rendered surfaces
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for polls_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => polls_domain::OutputFormat::Text,
            OutputFormat::Json => polls_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for pollboard
#[derive(Parser, Debug)]
#[command(name = "pollboard")]
#[command(author, version, about = "A small polling board with publication-window queries")]
#[command(long_about = r#"
Pollboard lists and inspects poll questions through their publication
window: a question is visible once its publication timestamp is no
longer in the future, and future-dated questions are indistinguishable
from nonexistent ones.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./pollboard.toml      Project-level config

Example:
  pollboard index
  pollboard detail 2
  pollboard add "What's your favorite editor?" --days -1
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Pollboard subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every published question, newest first
    Index,
    /// Show a single published question
    Detail {
        /// The question id
        id: u64,
    },
    /// Create a question with a publication offset from now
    Add {
        /// The question text
        text: String,
        /// Day offset from now (negative = already published)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        days: i64,
    },
}
