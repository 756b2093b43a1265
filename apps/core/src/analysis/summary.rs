//! Thread-level output records.
//!
//! Field names serialize in camelCase; existing consumers of the analysis
//! record read them verbatim.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CommentCategory;
use super::emoji::EmojiAnalysis;

/// Summary of a whole review thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Mean per-comment sentiment, clamped to [-1, 1]
    pub overall_sentiment: f32,
    /// Comments per category; absent categories are omitted
    pub category_distribution: BTreeMap<CommentCategory, usize>,
    /// Most frequent comment keywords
    pub top_keywords: Vec<String>,
    /// Emoji analysis of all comments, newline-joined
    pub emoji_analysis: EmojiAnalysis,
}

impl AnalysisSummary {
    /// Most frequent category, earliest declared on ties
    pub fn dominant_category(&self) -> Option<CommentCategory> {
        let mut dominant: Option<(CommentCategory, usize)> = None;
        for (&category, &count) in &self.category_distribution {
            if dominant.map_or(true, |(_, best)| count > best) {
                dominant = Some((category, count));
            }
        }
        dominant.map(|(category, _)| category)
    }

    /// Number of comments the summary was built from
    pub fn comment_count(&self) -> usize {
        self.category_distribution.values().sum()
    }

    /// One-line description for logs
    pub fn summary_line(&self) -> String {
        format!(
            "Sentiment: {:+.2}, Comments: {}, Dominant: {}, Keywords: {}, Emoji: {}",
            self.overall_sentiment,
            self.comment_count(),
            self.dominant_category()
                .map(|c| c.label())
                .unwrap_or("none"),
            self.top_keywords.len(),
            self.emoji_analysis.emoji_count
        )
    }
}

/// Summary plus provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: AnalysisSummary,
    pub comment_count: usize,
    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
    /// Wall-clock duration of the analysis
    pub processing_time_ms: u64,
}
