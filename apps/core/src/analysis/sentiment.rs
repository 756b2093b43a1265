//! Lexical sentiment scoring.
//!
//! Sums lexicon weights over every token and divides by the total token
//! count, so long neutral comments dilute a single strong word.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::SentimentLexicon;
use super::tokenizer::tokenize;

/// Tokens that flip the weight of the following lexicon hit
const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "cannot", "don't", "dont", "doesn't",
    "didn't", "isn't", "aren't", "wasn't", "weren't", "won't", "can't", "shouldn't",
    "wouldn't", "couldn't", "hasn't", "haven't",
];

/// A token that matched the lexicon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconHit {
    pub token: String,
    /// Weight contributed to the sum (negated when negation applied)
    pub weight: f32,
}

/// Result of lexical scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Summed weight divided by `max(1, token_count)`, not clamped
    pub score: f32,
    /// Number of tokens in the whole input
    pub token_count: usize,
    /// Lexicon hits in token order
    pub hits: Vec<LexiconHit>,
}

impl SentimentScore {
    /// Score clamped to [-1, 1]
    pub fn clamped(&self) -> f32 {
        self.score.clamp(-1.0, 1.0)
    }
}

/// Lexical sentiment scorer
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<SentimentLexicon>,
    negation: bool,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Scorer over the built-in lexicon, negation off
    pub fn new() -> Self {
        Self::with_lexicon(SentimentLexicon::builtin(), false)
    }

    pub fn with_lexicon(lexicon: Arc<SentimentLexicon>, negation: bool) -> Self {
        Self { lexicon, negation }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    fn is_negator(token: &str) -> bool {
        let normalized = token.replace('\u{2019}', "'");
        NEGATORS.contains(&normalized.as_str())
    }

    /// Score a text
    pub fn score(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        let mut sum = 0.0_f32;
        let mut hits = Vec::new();

        for (idx, token) in tokens.iter().enumerate() {
            let mut weight = self.lexicon.weight(token);
            if weight == 0.0 {
                continue;
            }
            if self.negation && idx > 0 && Self::is_negator(&tokens[idx - 1]) {
                weight = -weight;
            }
            sum += weight;
            hits.push(LexiconHit {
                token: token.clone(),
                weight,
            });
        }

        let token_count = tokens.len();
        let score = sum / token_count.max(1) as f32;
        debug!(token_count, hits = hits.len(), score, "Lexical sentiment scored");

        SentimentScore {
            score,
            token_count,
            hits,
        }
    }
}

/// Score a text with the default scorer
pub fn score_sentiment(text: &str) -> SentimentScore {
    SentimentScorer::new().score(text)
}
