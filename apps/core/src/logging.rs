//! Logging setup for the `mergepulse` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's job. All layers write to stderr so stdout stays reserved for
//! JSON results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Name reported in bunyan records.
const SERVICE_NAME: &str = "mergepulse";

/// Output format of the log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON records
    Bunyan,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Bunyan => "bunyan",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Build the filter; `RUST_LOG` wins over the configured level.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install the global subscriber.
///
/// Safe to call more than once: later calls are ignored, which keeps tests
/// that exercise the binary's setup path from panicking.
pub fn init_logging(log_level: &str, log_format: LogFormat) {
    let filter = build_filter(log_level);
    let subscriber = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true);
            let _ = subscriber.with(fmt_layer).try_init();
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .with_target(true);
            let _ = subscriber.with(fmt_layer).try_init();
        }
        LogFormat::Bunyan => {
            let formatting_layer =
                BunyanFormattingLayer::new(SERVICE_NAME.to_string(), std::io::stderr);
            let _ = subscriber
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .try_init();
        }
    }

    tracing::debug!(log_level = %log_level, log_format = %log_format, "Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Bunyan ".parse::<LogFormat>(), Ok(LogFormat::Bunyan));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_display_round_trips() {
        for format in [LogFormat::Pretty, LogFormat::Json, LogFormat::Bunyan] {
            assert_eq!(format.to_string().parse::<LogFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging("warn", LogFormat::Json);
        init_logging("debug", LogFormat::Pretty);
    }
}
