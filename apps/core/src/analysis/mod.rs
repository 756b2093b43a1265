//! # Analysis Module
//!
//! Deterministic, model-free analysis of code-review comments.
//!
//! ## Components
//! - `tokenizer`: Unicode word tokenization shared by the scorers
//! - `lexicon`: Word sentiment weights
//! - `emoji`: Emoji sentiment scoring and top-emoji ranking
//! - `sentiment`: Lexical sentiment scoring
//! - `category`: Keyword-based comment classification
//! - `comment`: Per-comment analysis
//! - `summary`: Thread-level output records
//! - `aggregator`: Thread orchestrator

pub mod aggregator;
pub mod category;
pub mod comment;
pub mod emoji;
pub mod lexicon;
pub mod sentiment;
pub mod summary;
pub mod tokenizer;

pub use aggregator::{analyze_comments, analyze_comments_async, ThreadAnalyzer};
pub use category::{classify, CategoryClassifier, Classification, CommentCategory};
pub use comment::{analyze_comment, CommentAnalysis, CommentAnalyzer};
pub use emoji::{analyze_emojis, EmojiAnalysis, EmojiCount, EmojiScorer};
pub use lexicon::SentimentLexicon;
pub use sentiment::{score_sentiment, LexiconHit, SentimentScore, SentimentScorer};
pub use summary::{AnalysisReport, AnalysisSummary};
