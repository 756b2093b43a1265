//! Per-comment analysis: lexical sentiment, category, and keywords.

use serde::{Deserialize, Serialize};

use super::category::{CategoryClassifier, CommentCategory};
use super::sentiment::{SentimentScore, SentimentScorer};

/// Default number of keywords kept per comment
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Analysis of one comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAnalysis {
    /// Lexical sentiment clamped to [-1, 1]
    pub sentiment: f32,
    pub category: CommentCategory,
    pub confidence: f32,
    /// Distinct lexicon hits, first-occurrence order
    pub keywords: Vec<String>,
}

/// Composes the lexical scorer and the classifier
#[derive(Debug, Clone)]
pub struct CommentAnalyzer {
    sentiment_scorer: SentimentScorer,
    classifier: CategoryClassifier,
    max_keywords: usize,
}

impl Default for CommentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentAnalyzer {
    pub fn new() -> Self {
        Self::with_parts(
            SentimentScorer::new(),
            CategoryClassifier::new(),
            DEFAULT_MAX_KEYWORDS,
        )
    }

    pub fn with_parts(
        sentiment_scorer: SentimentScorer,
        classifier: CategoryClassifier,
        max_keywords: usize,
    ) -> Self {
        Self {
            sentiment_scorer,
            classifier,
            max_keywords,
        }
    }

    /// Pick the tokens that moved the score, deduplicated
    fn extract_keywords(&self, score: &SentimentScore) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::with_capacity(self.max_keywords);
        for hit in score.hits.iter().filter(|hit| hit.weight != 0.0) {
            if keywords.len() == self.max_keywords {
                break;
            }
            if !keywords.contains(&hit.token) {
                keywords.push(hit.token.clone());
            }
        }
        keywords
    }

    /// Analyze a single comment. Empty text is valid, neutral input.
    pub fn analyze(&self, text: &str) -> CommentAnalysis {
        let score = self.sentiment_scorer.score(text);
        let classification = self.classifier.classify(text);

        CommentAnalysis {
            sentiment: score.clamped(),
            category: classification.category,
            confidence: classification.confidence,
            keywords: self.extract_keywords(&score),
        }
    }
}

/// Analyze a comment with the default analyzer
pub fn analyze_comment(text: &str) -> CommentAnalysis {
    CommentAnalyzer::new().analyze(text)
}
