//! Runtime configuration.
//!
//! Defaults reproduce the pipeline's documented limits. `from_env` lets a
//! deployment adjust them through `MERGEPULSE_*` variables (a `.env` file is
//! honoured when present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AnalysisError, Result};
use crate::logging::LogFormat;

const ENV_MAX_COMMENT_KEYWORDS: &str = "MERGEPULSE_MAX_COMMENT_KEYWORDS";
const ENV_MAX_TOP_KEYWORDS: &str = "MERGEPULSE_MAX_TOP_KEYWORDS";
const ENV_MAX_TOP_EMOJIS: &str = "MERGEPULSE_MAX_TOP_EMOJIS";
const ENV_MIN_CATEGORY_TOKEN_LEN: &str = "MERGEPULSE_MIN_CATEGORY_TOKEN_LEN";
const ENV_NEGATION: &str = "MERGEPULSE_NEGATION";
const ENV_PARALLEL_THRESHOLD: &str = "MERGEPULSE_PARALLEL_THRESHOLD";
const ENV_LEXICON_EXTRAS: &str = "MERGEPULSE_LEXICON_EXTRAS";
const ENV_LOG_LEVEL: &str = "MERGEPULSE_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "MERGEPULSE_LOG_FORMAT";

/// Tunables of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnalyzerConfig {
    /// Keywords kept per comment.
    #[validate(range(min = 1, max = 50))]
    pub max_comment_keywords: usize,
    /// Keywords kept in the thread summary.
    #[validate(range(min = 1, max = 100))]
    pub max_top_keywords: usize,
    /// Emoji kept in the top-emoji ranking.
    #[validate(range(min = 1, max = 20))]
    pub max_top_emojis: usize,
    /// Classifier tokens shorter than this are ignored.
    #[validate(range(min = 1, max = 16))]
    pub min_category_token_len: usize,
    /// Flip the weight of a lexicon hit that follows a negator.
    pub negation: bool,
    /// Threads with at least this many comments are analyzed in parallel.
    #[validate(range(min = 1))]
    pub parallel_threshold: usize,
    /// Optional JSON file of extra lexicon weights.
    #[serde(default)]
    pub lexicon_extras: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_comment_keywords: 5,
            max_top_keywords: 10,
            max_top_emojis: 3,
            min_category_token_len: 3,
            negation: false,
            parallel_threshold: 64,
            lexicon_extras: None,
        }
    }
}

impl AnalyzerConfig {
    /// Load the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            max_comment_keywords: env_parse(ENV_MAX_COMMENT_KEYWORDS)?
                .unwrap_or(defaults.max_comment_keywords),
            max_top_keywords: env_parse(ENV_MAX_TOP_KEYWORDS)?.unwrap_or(defaults.max_top_keywords),
            max_top_emojis: env_parse(ENV_MAX_TOP_EMOJIS)?.unwrap_or(defaults.max_top_emojis),
            min_category_token_len: env_parse(ENV_MIN_CATEGORY_TOKEN_LEN)?
                .unwrap_or(defaults.min_category_token_len),
            negation: env_flag(ENV_NEGATION)?.unwrap_or(defaults.negation),
            parallel_threshold: env_parse(ENV_PARALLEL_THRESHOLD)?
                .unwrap_or(defaults.parallel_threshold),
            lexicon_extras: env_var(ENV_LEXICON_EXTRAS).map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Logging settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let format = match env_var(ENV_LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|e| AnalysisError::Config(format!("{}: {}", ENV_LOG_FORMAT, e)))?,
            None => defaults.format,
        };

        Ok(Self {
            level: env_var(ENV_LOG_LEVEL).unwrap_or(defaults.level),
            format,
        })
    }
}

/// Non-empty value of an environment variable.
fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AnalysisError::Config(format!("{}='{}': {}", key, raw, e)))
        })
        .transpose()
}

fn env_flag(key: &str) -> Result<Option<bool>> {
    env_var(key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AnalysisError::Config(format!(
                "{}='{}': expected a boolean",
                key, raw
            ))),
        })
        .transpose()
}
