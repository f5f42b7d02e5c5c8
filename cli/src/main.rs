//! CLI entrypoint for pollboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use polls_application::{
    AddQuestionUseCase, Clock, LatestQuestionsUseCase, QuestionDetailError, QuestionDetailUseCase,
    QuestionRepository,
};
use polls_domain::{OutputFormat, QuestionId};
use polls_infrastructure::{ConfigLoader, FileSeedQuestion, InMemoryQuestionStore, SystemClock};
use polls_presentation::{Cli, Command, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting pollboard");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    let command = match cli.command {
        Some(command) => command,
        None => bail!("A command is required. Try 'pollboard index'."),
    };

    // === Dependency Injection ===
    // Create infrastructure adapters and seed the store from config
    let repository: Arc<dyn QuestionRepository> = Arc::new(InMemoryQuestionStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

    // Seeding shares the validated create path with the add command
    let add_use_case = AddQuestionUseCase::new(repository.clone(), clock.clone());
    seed_store(&add_use_case, &config.seed)?;

    // Output format: flag wins over config file
    let format: OutputFormat = match cli.output {
        Some(flag) => flag.into(),
        None => config.output.parse_format(),
    };

    match command {
        Command::Index => {
            let use_case = LatestQuestionsUseCase::new(repository, clock);
            let latest = use_case.execute();

            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_index(&config.board.title, &latest),
                OutputFormat::Json => ConsoleFormatter::format_index_json(&latest),
            };
            println!("{}", output);
        }

        Command::Detail { id } => {
            let use_case = QuestionDetailUseCase::new(repository, clock);

            match use_case.execute(QuestionId::new(id)) {
                Ok(question) => {
                    let output = match format {
                        OutputFormat::Text => ConsoleFormatter::format_detail(&question),
                        OutputFormat::Json => ConsoleFormatter::format_detail_json(&question),
                    };
                    println!("{}", output);
                }
                Err(QuestionDetailError::NotFound(id)) => {
                    // Console analogue of a not-found response: message
                    // plus a non-zero exit status. Future-dated and
                    // nonexistent ids land here identically.
                    eprint!("{}", ConsoleFormatter::format_not_found(id));
                    std::process::exit(1);
                }
            }
        }

        Command::Add { text, days } => {
            let question = add_use_case.execute(&text, days)?;
            println!(
                "Created question {} publishing at {}",
                question.id(),
                question.pub_date()
            );
        }
    }

    Ok(())
}

/// Create the configured seed questions, offset from now by whole days
fn seed_store(use_case: &AddQuestionUseCase, seeds: &[FileSeedQuestion]) -> Result<()> {
    for seed in seeds {
        if let Err(error) = use_case.execute(&seed.text, seed.days) {
            bail!("Invalid seed question '{}': {}", seed.text, error);
        }
    }
    if !seeds.is_empty() {
        info!("Seeded {} questions from config", seeds.len());
    }
    Ok(())
}
