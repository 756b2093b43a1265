//! Thread Analyzer - aggregates per-comment analyses into one summary.
//!
//! Fans the per-comment analyzer out over the thread (in parallel for large
//! threads), runs the emoji scorer over the newline-joined thread, and
//! reduces everything to an [`AnalysisSummary`].

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::category::{CategoryClassifier, CommentCategory};
use super::comment::{CommentAnalysis, CommentAnalyzer};
use super::emoji::EmojiScorer;
use super::lexicon::SentimentLexicon;
use super::sentiment::SentimentScorer;
use super::summary::{AnalysisReport, AnalysisSummary};
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};

/// Orchestrates the whole comment pipeline
#[derive(Debug, Clone)]
pub struct ThreadAnalyzer {
    comment_analyzer: CommentAnalyzer,
    emoji_scorer: EmojiScorer,
    max_top_keywords: usize,
    parallel_threshold: usize,
}

impl Default for ThreadAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadAnalyzer {
    /// Analyzer with the default configuration and built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(&AnalyzerConfig::default(), SentimentLexicon::builtin())
    }

    /// Build from a configuration, loading lexicon extras if configured
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let lexicon = match &config.lexicon_extras {
            Some(path) => Arc::new(SentimentLexicon::from_extras_file(path)?),
            None => SentimentLexicon::builtin(),
        };
        Ok(Self::with_lexicon(config, lexicon))
    }

    pub fn with_lexicon(config: &AnalyzerConfig, lexicon: Arc<SentimentLexicon>) -> Self {
        let comment_analyzer = CommentAnalyzer::with_parts(
            SentimentScorer::with_lexicon(lexicon, config.negation),
            CategoryClassifier::with_min_token_len(config.min_category_token_len),
            config.max_comment_keywords,
        );

        Self {
            comment_analyzer,
            emoji_scorer: EmojiScorer::with_top(config.max_top_emojis),
            max_top_keywords: config.max_top_keywords,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Per-comment analyzer used by this thread analyzer
    pub fn comment_analyzer(&self) -> &CommentAnalyzer {
        &self.comment_analyzer
    }

    pub fn emoji_scorer(&self) -> &EmojiScorer {
        &self.emoji_scorer
    }

    /// Analyze every comment, keeping input order
    fn analyze_each<S>(&self, comments: &[S]) -> Vec<CommentAnalysis>
    where
        S: AsRef<str> + Sync,
    {
        if comments.len() >= self.parallel_threshold {
            debug!(comments = comments.len(), "Analyzing comments in parallel");
            comments
                .par_iter()
                .map(|comment| self.comment_analyzer.analyze(comment.as_ref()))
                .collect()
        } else {
            comments
                .iter()
                .map(|comment| self.comment_analyzer.analyze(comment.as_ref()))
                .collect()
        }
    }

    /// Rank keywords by frequency, first occurrence on ties
    fn rank_keywords(&self, analyses: &[CommentAnalysis]) -> Vec<String> {
        let mut ranked: Vec<(&str, usize)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for keyword in analyses.iter().flat_map(|a| a.keywords.iter()) {
            match positions.get(keyword.as_str()) {
                Some(&idx) => ranked[idx].1 += 1,
                None => {
                    positions.insert(keyword.as_str(), ranked.len());
                    ranked.push((keyword.as_str(), 1));
                }
            }
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(self.max_top_keywords)
            .map(|(keyword, _)| keyword.to_string())
            .collect()
    }

    fn distribution(analyses: &[CommentAnalysis]) -> BTreeMap<CommentCategory, usize> {
        let mut distribution = BTreeMap::new();
        for analysis in analyses {
            *distribution.entry(analysis.category).or_insert(0) += 1;
        }
        distribution
    }

    /// Analyze a review thread.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when `comments` is empty.
    pub fn analyze<S>(&self, comments: &[S]) -> Result<AnalysisSummary>
    where
        S: AsRef<str> + Sync,
    {
        if comments.is_empty() {
            warn!("Refusing to analyze an empty comment thread");
            return Err(AnalysisError::EmptyInput);
        }

        let analyses = self.analyze_each(comments);

        let total: f32 = analyses.iter().map(|a| a.sentiment).sum();
        let overall_sentiment = (total / analyses.len() as f32).clamp(-1.0, 1.0);

        let joined = comments
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        let emoji_analysis = self.emoji_scorer.analyze(&joined);

        let summary = AnalysisSummary {
            overall_sentiment,
            category_distribution: Self::distribution(&analyses),
            top_keywords: self.rank_keywords(&analyses),
            emoji_analysis,
        };

        info!("Thread analyzed: {}", summary.summary_line());
        Ok(summary)
    }

    /// Analyze a thread and wrap the summary with timing information
    pub fn analyze_report<S>(&self, comments: &[S]) -> Result<AnalysisReport>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let summary = self.analyze(comments)?;

        Ok(AnalysisReport {
            summary,
            comment_count: comments.len(),
            analyzed_at: Utc::now(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Analyze on tokio's blocking pool, for async callers
    pub async fn analyze_async(&self, comments: Vec<String>) -> Result<AnalysisSummary> {
        let analyzer = self.clone();
        tokio::task::spawn_blocking(move || analyzer.analyze(&comments)).await?
    }
}

/// Analyze a thread with the default analyzer
pub fn analyze_comments<S>(comments: &[S]) -> Result<AnalysisSummary>
where
    S: AsRef<str> + Sync,
{
    ThreadAnalyzer::new().analyze(comments)
}

/// Async variant of [`analyze_comments`]
pub async fn analyze_comments_async(comments: Vec<String>) -> Result<AnalysisSummary> {
    ThreadAnalyzer::new().analyze_async(comments).await
}
