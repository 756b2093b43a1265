//! Comment category classification.
//!
//! Keyword-substring matching over the comment's tokens. No model required.
//! Ties are resolved by the declaration order of [`CommentCategory`], so an
//! empty comment lands on `approval` with zero confidence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::tokenizer::tokenize_min_len;

/// Tokens shorter than this are ignored by the classifier
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Intent of a review comment.
///
/// Variant order is the tie-break priority: first declared wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentCategory {
    /// Sign-off (lgtm, approve, merge, ...)
    Approval,
    /// Proposed alternative (maybe, suggest, consider, ...)
    Suggestion,
    /// Request for information (why, how, what, ...)
    Question,
    /// Reported defect or risk (issue, bug, error, ...)
    Concern,
    /// Compliment (great, excellent, awesome, ...)
    Praise,
}

impl CommentCategory {
    /// Every category, in tie-break order
    pub const ALL: [CommentCategory; 5] = [
        CommentCategory::Approval,
        CommentCategory::Suggestion,
        CommentCategory::Question,
        CommentCategory::Concern,
        CommentCategory::Praise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CommentCategory::Approval => "approval",
            CommentCategory::Suggestion => "suggestion",
            CommentCategory::Question => "question",
            CommentCategory::Concern => "concern",
            CommentCategory::Praise => "praise",
        }
    }

    /// Substrings that signal this category.
    ///
    /// Multi-word entries and `?` can never be contained in a single token;
    /// they are kept so the table stays the documented one.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CommentCategory::Approval => &["lgtm", "approve", "approved", "yes", "good", "merge"],
            CommentCategory::Suggestion => &["maybe", "suggest", "could", "what if", "consider"],
            CommentCategory::Question => &["why", "how", "what", "when", "?"],
            CommentCategory::Concern => &["issue", "problem", "bug", "error", "wrong"],
            CommentCategory::Praise => &["great", "excellent", "awesome", "nice", "well done"],
        }
    }

    /// Whether a token contains one of this category's keywords
    pub fn matches(&self, token: &str) -> bool {
        self.keywords().iter().any(|keyword| token.contains(keyword))
    }
}

impl fmt::Display for CommentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CommentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommentCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown comment category '{}'", s))
    }
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Winning category
    pub category: CommentCategory,
    /// Matching tokens / total tokens for the winner. A heuristic, not a probability.
    pub confidence: f32,
    /// Tokens considered (after the length filter)
    pub token_count: usize,
    /// Tokens that matched the winning category
    pub matched_tokens: Vec<String>,
}

/// Keyword-based comment classifier
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    min_token_len: usize,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    pub fn new() -> Self {
        Self::with_min_token_len(DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn with_min_token_len(min_token_len: usize) -> Self {
        Self { min_token_len }
    }

    /// Classify a comment
    pub fn classify(&self, text: &str) -> Classification {
        let tokens = tokenize_min_len(text, self.min_token_len);
        let token_count = tokens.len();
        let denominator = token_count.max(1) as f32;

        let mut best = Classification {
            category: CommentCategory::ALL[0],
            confidence: 0.0,
            token_count,
            matched_tokens: vec![],
        };

        for category in CommentCategory::ALL {
            let matched: Vec<String> = tokens
                .iter()
                .filter(|token| category.matches(token))
                .cloned()
                .collect();
            let confidence = matched.len() as f32 / denominator;

            // strictly greater: earlier categories win ties
            if confidence > best.confidence {
                best.category = category;
                best.confidence = confidence;
                best.matched_tokens = matched;
            }
        }

        debug!(
            category = %best.category,
            confidence = best.confidence,
            token_count,
            "Comment classified"
        );

        best
    }
}

/// Classify with the default classifier
pub fn classify(text: &str) -> Classification {
    CategoryClassifier::new().classify(text)
}
