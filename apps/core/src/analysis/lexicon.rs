//! Word sentiment lexicon.
//!
//! The built-in table is the AFINN-165 word list (integer weights in
//! [-5, 5]), embedded at compile time, with a code-review overlay on top. A
//! lexicon is immutable once built; callers that need extra words build a
//! new one with [`SentimentLexicon::with_extras`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use tracing::{debug, warn};

use crate::error::{AnalysisError, Result};

/// Inclusive bound of a lexicon weight
pub const MAX_WEIGHT: f32 = 5.0;

/// Tab-separated `word\tweight` lines
const AFINN_165: &str = include_str!("../../data/afinn-165.txt");

/// Code-review jargon
const REVIEW_WORDS: &[(&str, i8)] = &[
    ("lgtm", 3),
    ("shipit", 3),
    ("nit", -1),
    ("nitpick", -1),
    ("typo", -1),
    ("bug", -2),
    ("bugs", -2),
    ("buggy", -2),
    ("regression", -2),
    ("flaky", -2),
    ("hacky", -2),
    ("leak", -2),
    ("deprecated", -1),
    ("duplicated", -1),
    ("concern", -1),
    ("concerned", -2),
    ("readable", 2),
    ("tidy", 2),
    ("approve", 2),
    ("blocker", -2),
    ("correct", 1),
    ("incorrect", -2),
    ("crashes", -2),
    ("efficient", 2),
    ("fix", 1),
    ("fixed", 2),
    ("fault", -2),
    ("faulty", -2),
    ("fragile", -2),
    ("issue", -1),
    ("issues", -1),
    ("messy", -2),
    ("neat", 2),
    ("simple", 1),
    ("slow", -2),
];

/// Parse AFINN lines; malformed lines are skipped
fn parse_afinn(source: &str) -> impl Iterator<Item = (&str, i8)> + '_ {
    source.lines().filter_map(|line| {
        let (word, weight) = line.split_once('\t')?;
        match weight.trim().parse::<i8>() {
            Ok(weight) => Some((word, weight)),
            Err(_) => {
                warn!(line, "Skipping malformed lexicon line");
                None
            }
        }
    })
}

static BUILTIN: LazyLock<Arc<SentimentLexicon>> = LazyLock::new(|| {
    // review overlay wins over AFINN
    let weights = parse_afinn(AFINN_165)
        .chain(REVIEW_WORDS.iter().copied())
        .map(|(word, weight)| (word.to_lowercase(), f32::from(weight)))
        .collect();
    Arc::new(SentimentLexicon { weights })
});

/// Immutable word → weight table
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentLexicon {
    weights: HashMap<String, f32>,
}

impl SentimentLexicon {
    /// Shared handle to the built-in lexicon
    pub fn builtin() -> Arc<SentimentLexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Build a lexicon from the built-in table plus overrides.
    ///
    /// Keys are lowercased; an override replaces the built-in weight.
    pub fn with_extras<I, S>(extras: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let mut weights = BUILTIN.weights.clone();
        for (word, weight) in extras {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(AnalysisError::Validation(
                    "lexicon extras contain an empty word".to_string(),
                ));
            }
            if !weight.is_finite() || weight.abs() > MAX_WEIGHT {
                return Err(AnalysisError::Validation(format!(
                    "lexicon weight for '{}' must lie in [-{max}, {max}], got {}",
                    word,
                    weight,
                    max = MAX_WEIGHT
                )));
            }
            weights.insert(word, weight);
        }
        Ok(Self { weights })
    }

    /// Parse extras from a JSON object such as `{"blocker": -3, "ship": 2}`
    pub fn from_extras_json(json: &str) -> Result<Self> {
        let extras: HashMap<String, f32> = serde_json::from_str(json)?;
        Self::with_extras(extras)
    }

    /// Load extras from a JSON file
    pub fn from_extras_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let lexicon = Self::from_extras_json(&json)?;
        debug!(path = %path.display(), words = lexicon.len(), "Loaded lexicon extras");
        Ok(lexicon)
    }

    /// Weight of a lowercased token, 0 when absent
    pub fn weight(&self, token: &str) -> f32 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_weights_in_range() {
        let afinn: Vec<_> = parse_afinn(AFINN_165).collect();
        assert!(afinn.len() > 3000, "AFINN list truncated: {}", afinn.len());
        for (word, weight) in afinn.iter().chain(REVIEW_WORDS) {
            assert!(
                f32::from(*weight).abs() <= MAX_WEIGHT,
                "weight out of range for '{}'",
                word
            );
            assert_eq!(word.to_lowercase(), *word, "lexicon keys must be lowercase");
        }
    }

    #[test]
    fn test_general_vocabulary() {
        let lexicon = SentimentLexicon::builtin();
        for (word, weight) in [
            ("sorry", -1.0),
            ("complicated", -2.0),
            ("missing", -2.0),
            ("please", 1.0),
            ("help", 2.0),
            ("sure", 1.0),
            ("strange", -1.0),
            ("nasty", -3.0),
            ("hack", -1.0),
            ("lol", 3.0),
        ] {
            assert_eq!(lexicon.weight(word), weight, "weight of '{}'", word);
        }
    }

    #[test]
    fn test_review_overlay_wins() {
        let lexicon = SentimentLexicon::builtin();
        // AFINN scores "leak" -1
        assert_eq!(lexicon.weight("leak"), -2.0);
        assert_eq!(lexicon.weight("slow"), -2.0);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let parsed: Vec<_> = parse_afinn("good\t3\nbroken line\nbad\tx\nugly\t-3\n").collect();
        assert_eq!(parsed, vec![("good", 3), ("ugly", -3)]);
    }

    #[test]
    fn test_lookup() {
        let lexicon = SentimentLexicon::builtin();
        assert_eq!(lexicon.weight("great"), 3.0);
        assert_eq!(lexicon.weight("lgtm"), 3.0);
        assert_eq!(lexicon.weight("error"), -2.0);
        assert_eq!(lexicon.weight("refactor"), 0.0);
    }

    #[test]
    fn test_extras_override_and_extend() {
        let lexicon = SentimentLexicon::with_extras([("Refactor", 1.0), ("great", 1.0)]).unwrap();
        assert_eq!(lexicon.weight("refactor"), 1.0);
        assert_eq!(lexicon.weight("great"), 1.0);
        // the shared built-in table is untouched
        assert_eq!(SentimentLexicon::builtin().weight("great"), 3.0);
    }

    #[test]
    fn test_extras_out_of_range_rejected() {
        let err = SentimentLexicon::with_extras([("doom", -7.5)]).unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }

    #[test]
    fn test_extras_from_json() {
        let lexicon = SentimentLexicon::from_extras_json(r#"{"shippable": 2}"#).unwrap();
        assert_eq!(lexicon.weight("shippable"), 2.0);

        assert!(SentimentLexicon::from_extras_json("[1, 2]").is_err());
    }
}
