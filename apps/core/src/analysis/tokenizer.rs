//! Word tokenization shared by the lexical scorer and the classifier.
//!
//! Splits on Unicode (UAX #29) word boundaries after lowercasing. Segments
//! without any alphanumeric character (punctuation, whitespace, emoji) are
//! dropped.

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into lowercased words
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_string)
        .collect()
}

/// Tokenize, keeping only tokens of at least `min_len` characters
pub fn tokenize_min_len(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.chars().count() >= min_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_punctuation() {
        assert_eq!(tokenize("LGTM, great work!"), vec!["lgtm", "great", "work"]);
    }

    #[test]
    fn test_emoji_are_not_tokens() {
        assert_eq!(tokenize("Nice 👍🎉 job"), vec!["nice", "job"]);
        assert!(tokenize("👍👍🎉").is_empty());
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(tokenize("Don't merge"), vec!["don't", "merge"]);
    }

    #[test]
    fn test_hyphenated_words_split() {
        assert_eq!(tokenize("error-handling"), vec!["error", "handling"]);
    }

    #[test]
    fn test_min_len_filter() {
        assert_eq!(
            tokenize_min_len("I think we should do it", 3),
            vec!["think", "should"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("?!...").is_empty());
    }
}
