//! MergePulse Core
//!
//! Deterministic analysis of pull-request review threads: emoji and lexical
//! sentiment, keyword-based comment categories, thread aggregation and the
//! merge gate built on top of them.
//!
//! ```no_run
//! use mergepulse_core::analysis::analyze_comments;
//!
//! let summary = analyze_comments(&["LGTM, great work! 👍"])?;
//! println!("{}", summary.summary_line());
//! # Ok::<(), mergepulse_core::AnalysisError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod logging;
pub mod review;

#[cfg(test)]
mod tests;

pub use analysis::{
    analyze_comment, analyze_comments, analyze_comments_async, analyze_emojis, classify,
    score_sentiment, AnalysisReport, AnalysisSummary, CommentAnalysis, CommentCategory,
    EmojiAnalysis, ThreadAnalyzer,
};
pub use config::{AnalyzerConfig, LogConfig};
pub use error::{AnalysisError, Result};
pub use logging::{init_logging, LogFormat};
pub use review::{analyze_pull_request, assess_reviews, PullRequestAnalysis, Review, ReviewState};
