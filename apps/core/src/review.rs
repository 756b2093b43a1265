//! Merge gate over pull-request reviews.
//!
//! Counts review states and embeds the thread analysis of the review bodies
//! into the record stored per pull request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{AnalysisSummary, CommentCategory, EmojiAnalysis, ThreadAnalyzer};
use crate::error::Result;

/// State of a submitted review, as reported by the hosting API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    Pending,
}

/// A pull-request review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub state: ReviewState,
    #[serde(default)]
    pub body: Option<String>,
}

impl Review {
    pub fn new(state: ReviewState, body: impl Into<String>) -> Self {
        Self {
            state,
            body: Some(body.into()),
        }
    }

    /// Body text, if any non-blank text was written
    pub fn text(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }
}

/// Review-state tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReadiness {
    pub approvals: usize,
    pub changes: usize,
    pub can_merge: bool,
}

/// Thread analysis fields of the pull-request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlAnalysis {
    pub overall_sentiment: f32,
    pub category_distribution: BTreeMap<CommentCategory, usize>,
    pub top_keywords: Vec<String>,
}

/// Analysis record stored per pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestAnalysis {
    pub sentiment: f32,
    pub approvals: usize,
    pub changes: usize,
    pub can_merge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_analysis: Option<EmojiAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ml_analysis: Option<MlAnalysis>,
}

impl From<AnalysisSummary> for MlAnalysis {
    fn from(summary: AnalysisSummary) -> Self {
        Self {
            overall_sentiment: summary.overall_sentiment,
            category_distribution: summary.category_distribution,
            top_keywords: summary.top_keywords,
        }
    }
}

/// Count approvals and change requests; one approval makes a PR mergeable
pub fn assess_reviews(reviews: &[Review]) -> MergeReadiness {
    let approvals = reviews
        .iter()
        .filter(|r| r.state == ReviewState::Approved)
        .count();
    let changes = reviews
        .iter()
        .filter(|r| r.state == ReviewState::ChangesRequested)
        .count();

    MergeReadiness {
        approvals,
        changes,
        can_merge: approvals > 0,
    }
}

/// Build the pull-request record from its reviews
pub fn analyze_pull_request(
    analyzer: &ThreadAnalyzer,
    reviews: &[Review],
) -> Result<PullRequestAnalysis> {
    let readiness = assess_reviews(reviews);
    let bodies: Vec<&str> = reviews.iter().filter_map(Review::text).collect();

    let (sentiment, emoji_analysis, ml_analysis) = if bodies.is_empty() {
        (0.0, None, None)
    } else {
        let summary = analyzer.analyze(&bodies)?;
        let sentiment = summary.overall_sentiment;
        let emoji = summary.emoji_analysis.clone();
        (sentiment, Some(emoji), Some(MlAnalysis::from(summary)))
    };

    info!(
        reviews = reviews.len(),
        approvals = readiness.approvals,
        changes = readiness.changes,
        can_merge = readiness.can_merge,
        "Pull request assessed"
    );

    Ok(PullRequestAnalysis {
        sentiment,
        approvals: readiness.approvals,
        changes: readiness.changes,
        can_merge: readiness.can_merge,
        emoji_analysis,
        ml_analysis,
    })
}
