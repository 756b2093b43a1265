// MergePulse CLI Entry Point
// Reads review threads as JSON, prints analysis records as JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, error};

use mergepulse_core::analysis::CategoryClassifier;
use mergepulse_core::diagnostics::run_diagnostics;
use mergepulse_core::input::{load_comments, load_reviews, STDIN_PATH};
use mergepulse_core::{
    analyze_pull_request, init_logging, AnalyzerConfig, LogConfig, LogFormat, ThreadAnalyzer,
};

#[derive(Debug, Parser)]
#[command(name = "mergepulse", version, about = "Review-comment analysis for pull requests")]
struct Cli {
    /// Log level or filter directive (overrides MERGEPULSE_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format (overrides MERGEPULSE_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// JSON file of extra lexicon weights (overrides MERGEPULSE_LEXICON_EXTRAS)
    #[arg(long, global = true)]
    lexicon_extras: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a comment thread
    Analyze {
        /// JSON array of comments, `-` for stdin
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
        /// Wrap the summary with timing information
        #[arg(long)]
        report: bool,
    },
    /// Analyze a single comment
    Comment { text: String },
    /// Classify a single comment
    Classify { text: String },
    /// Score the emoji of a text
    Emoji { text: String },
    /// Build the merge-gate record for a list of reviews
    Gate {
        /// JSON array of reviews, `-` for stdin
        #[arg(default_value = STDIN_PATH)]
        file: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Run the built-in analyzer checks
    Selfcheck,
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env().context("Invalid logging configuration")?;
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(format) = cli.log_format {
        log_config.format = format;
    }
    init_logging(&log_config.level, log_config.format);

    let mut config = AnalyzerConfig::from_env().context("Invalid analyzer configuration")?;
    if let Some(path) = cli.lexicon_extras {
        config.lexicon_extras = Some(path);
    }
    debug!(?config, "Configuration loaded");

    let analyzer = ThreadAnalyzer::from_config(&config).context("Failed to build analyzer")?;

    match cli.command {
        Command::Analyze {
            file,
            pretty,
            report,
        } => {
            let comments = load_comments(&file)
                .with_context(|| format!("Failed to read comments from {}", file.display()))?;
            if report {
                emit(&analyzer.analyze_report(&comments)?, pretty)?;
            } else {
                emit(&analyzer.analyze_async(comments).await?, pretty)?;
            }
        }
        Command::Comment { text } => {
            emit(&analyzer.comment_analyzer().analyze(&text), false)?;
        }
        Command::Classify { text } => {
            let classifier = CategoryClassifier::with_min_token_len(config.min_category_token_len);
            emit(&classifier.classify(&text), false)?;
        }
        Command::Emoji { text } => {
            emit(&analyzer.emoji_scorer().analyze(&text), false)?;
        }
        Command::Gate { file, pretty } => {
            let reviews = load_reviews(&file)
                .with_context(|| format!("Failed to read reviews from {}", file.display()))?;
            emit(&analyze_pull_request(&analyzer, &reviews)?, pretty)?;
        }
        Command::Selfcheck => {
            let report = run_diagnostics(&analyzer);
            emit(&report, true)?;
            if !report.all_passed() {
                error!(failed = report.failed, "Self-check failed");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
