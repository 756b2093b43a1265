use std::io;
use thiserror::Error;

/// Crate-wide error type for the analysis pipeline and its front ends.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The aggregator was handed a thread with no comments; no mean exists.
    #[error("Cannot analyze an empty comment thread")]
    EmptyInput,

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g., malformed JSON input, out-of-range weights).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents standard input/output errors while loading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for AnalysisError {
    fn clone(&self) -> Self {
        match self {
            AnalysisError::EmptyInput => AnalysisError::EmptyInput,
            AnalysisError::Config(s) => AnalysisError::Config(s.clone()),
            AnalysisError::Validation(s) => AnalysisError::Validation(s.clone()),
            AnalysisError::Io(e) => AnalysisError::Io(io::Error::new(e.kind(), e.to_string())),
            AnalysisError::Internal(s) => AnalysisError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AnalysisError {
    fn from(err: validator::ValidationErrors) -> Self {
        AnalysisError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<tokio::task::JoinError> for AnalysisError {
    fn from(err: tokio::task::JoinError) -> Self {
        AnalysisError::Internal(format!("Analysis task failed: {}", err))
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
