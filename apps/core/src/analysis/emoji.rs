//! Emoji sentiment scoring.
//!
//! A glyph is one emoji sequence: a code point with the Unicode `Emoji`
//! property, plus an optional skin-tone modifier and variation selector,
//! continued through zero-width joiners. Regional-indicator pairs (flags) and
//! keycaps count as one glyph. Bare ASCII digits, `#` and `*` carry the
//! `Emoji` property but are treated as text.
//!
//! Counting is per glyph, not per code point: `👨‍👩‍👧` is five code
//! points (three emoji joined by two ZWJ) but one glyph, and "Fixed 2 bugs"
//! has no glyph at all.
//!
//! Normalization: the summed weight of recognized glyphs is divided by the
//! number of *all* glyphs scanned, and `emoji_count` reports that same total.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default length of the top-emoji ranking
pub const DEFAULT_TOP_EMOJIS: usize = 3;

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Emoji weights in [-1, 1]
const EMOJI_WEIGHTS: &[(&str, f32)] = &[
    // Positive reactions
    ("👍", 1.0),
    ("❤️", 1.0),
    ("🎉", 1.0),
    ("🚀", 1.0),
    ("💯", 1.0),
    ("✨", 0.5),
    ("🌟", 0.5),
    // Approval
    ("✅", 1.0),
    ("☑️", 0.5),
    ("👏", 0.5),
    // Negative reactions
    ("👎", -1.0),
    ("😕", -0.5),
    ("❌", -1.0),
    ("🤔", -0.3),
    ("😬", -0.5),
    // Neutral / suggestion
    ("💭", 0.0),
    ("💡", 0.2),
    ("🤓", 0.1),
];

// NOTE: expect() is acceptable here, the pattern is a compile-time constant
static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        [\x{1F1E6}-\x{1F1FF}]{2}
        |
        [0-9\#*]\x{FE0F}?\x{20E3}
        |
        [\p{Emoji}--\p{ASCII}]\p{Emoji_Modifier}?\x{FE0F}?
        (?:\x{200D}[\p{Emoji}--\p{ASCII}]\p{Emoji_Modifier}?\x{FE0F}?)*
        ",
    )
    .expect("Invalid regex: emoji glyph pattern")
});

/// Lookup key (modifiers stripped) → (display glyph, weight)
static EMOJI_LEXICON: LazyLock<HashMap<String, (&'static str, f32)>> = LazyLock::new(|| {
    EMOJI_WEIGHTS
        .iter()
        .map(|(glyph, weight)| (lookup_key(glyph), (*glyph, *weight)))
        .collect()
});

/// Drop variation selectors and skin-tone modifiers
fn lookup_key(glyph: &str) -> String {
    glyph
        .chars()
        .filter(|c| *c != VARIATION_SELECTOR && !('\u{1F3FB}'..='\u{1F3FF}').contains(c))
        .collect()
}

/// Canonical glyph and weight, if the glyph is in the emoji lexicon
fn recognize(glyph: &str) -> Option<(&'static str, f32)> {
    EMOJI_LEXICON.get(&lookup_key(glyph)).copied()
}

/// Iterate over the emoji glyphs of a text, in order
pub fn scan_glyphs(text: &str) -> impl Iterator<Item = &str> {
    EMOJI_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Usage count of one emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Result of emoji scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiAnalysis {
    /// Recognized weight divided by all glyphs scanned
    pub score: f32,
    /// All glyphs scanned, recognized or not
    pub emoji_count: usize,
    /// Most used recognized emoji, count descending, first-seen on ties
    pub top_emojis: Vec<EmojiCount>,
}

impl EmojiAnalysis {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            emoji_count: 0,
            top_emojis: vec![],
        }
    }
}

/// Emoji scorer
#[derive(Debug, Clone)]
pub struct EmojiScorer {
    max_top_emojis: usize,
}

impl Default for EmojiScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiScorer {
    pub fn new() -> Self {
        Self::with_top(DEFAULT_TOP_EMOJIS)
    }

    /// Scorer keeping `max_top_emojis` entries in the ranking
    pub fn with_top(max_top_emojis: usize) -> Self {
        Self { max_top_emojis }
    }

    /// Scan a text blob and reduce it to an emoji analysis
    pub fn analyze(&self, text: &str) -> EmojiAnalysis {
        let mut raw_score = 0.0_f32;
        let mut scanned = 0_usize;
        let mut counts: Vec<EmojiCount> = Vec::new();
        let mut positions: HashMap<&'static str, usize> = HashMap::new();

        for glyph in scan_glyphs(text) {
            scanned += 1;

            let Some((display, weight)) = recognize(glyph) else {
                continue;
            };
            raw_score += weight;

            match positions.get(display) {
                Some(&idx) => counts[idx].count += 1,
                None => {
                    positions.insert(display, counts.len());
                    counts.push(EmojiCount {
                        emoji: display.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // stable sort keeps first-seen order among equal counts
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(self.max_top_emojis);

        let score = raw_score / scanned.max(1) as f32;
        debug!(scanned, recognized = counts.len(), score, "Emoji scan complete");

        EmojiAnalysis {
            score,
            emoji_count: scanned,
            top_emojis: counts,
        }
    }
}

/// Analyze emoji with the default scorer
pub fn analyze_emojis(text: &str) -> EmojiAnalysis {
    EmojiScorer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(analysis: &EmojiAnalysis) -> Vec<(&str, usize)> {
        analysis
            .top_emojis
            .iter()
            .map(|e| (e.emoji.as_str(), e.count))
            .collect()
    }

    #[test]
    fn test_thumbs_and_party() {
        let analysis = analyze_emojis("Nice work 👍👍🎉");
        assert_eq!(analysis.score, 1.0);
        assert_eq!(analysis.emoji_count, 3);
        assert_eq!(top(&analysis), vec![("👍", 2), ("🎉", 1)]);
    }

    #[test]
    fn test_no_emoji() {
        assert_eq!(analyze_emojis(""), EmojiAnalysis::empty());
        assert_eq!(analyze_emojis("plain text, no glyphs"), EmojiAnalysis::empty());
    }

    #[test]
    fn test_ascii_digits_are_not_emoji() {
        let analysis = analyze_emojis("Fixed 2 bugs in #42 *quickly*");
        assert_eq!(analysis.emoji_count, 0);
    }

    #[test]
    fn test_unrecognized_emoji_dilute_score() {
        // 🐢 is an emoji but not in the lexicon
        let analysis = analyze_emojis("👍 🐢");
        assert_eq!(analysis.emoji_count, 2);
        assert_eq!(analysis.score, 0.5);
        assert_eq!(top(&analysis), vec![("👍", 1)]);
    }

    #[test]
    fn test_variation_selector_and_skin_tone() {
        // with and without U+FE0F, and a skin-toned thumbs up
        let analysis = analyze_emojis("❤️ ❤ 👍🏽");
        assert_eq!(analysis.emoji_count, 3);
        assert_eq!(analysis.score, 1.0);
        assert_eq!(top(&analysis), vec![("❤️", 2), ("👍", 1)]);
    }

    #[test]
    fn test_zwj_sequence_is_one_glyph() {
        // man, ZWJ, woman, ZWJ, girl: five code points, three with the Emoji
        // property, rendered as one family glyph
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(family.chars().count(), 5);

        let analysis = analyze_emojis(family);
        assert_eq!(analysis.emoji_count, 1);
        assert_eq!(analysis.score, 0.0);
        assert!(analysis.top_emojis.is_empty());

        // a ZWJ-joined sequence next to a recognized glyph still counts once
        let analysis = analyze_emojis(&format!("{} 👍", family));
        assert_eq!(analysis.emoji_count, 2);
        assert_eq!(analysis.score, 0.5);
    }

    #[test]
    fn test_flag_is_one_glyph() {
        assert_eq!(scan_glyphs("ship it 🇫🇷").count(), 1);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let analysis = analyze_emojis("🚀 ❌ 🎉 👎 🚀 ❌");
        assert_eq!(top(&analysis), vec![("🚀", 2), ("❌", 2), ("🎉", 1)]);
        assert_eq!(analysis.emoji_count, 6);
    }

    #[test]
    fn test_negative_score() {
        let analysis = analyze_emojis("👎👎");
        assert_eq!(analysis.score, -1.0);
    }

    #[test]
    fn test_top_limit() {
        let analysis = EmojiScorer::with_top(1).analyze("🎉 🚀 🚀");
        assert_eq!(top(&analysis), vec![("🚀", 2)]);
    }

    #[test]
    fn test_weight_lookup() {
        assert_eq!(recognize("🤔"), Some(("🤔", -0.3)));
        assert_eq!(recognize("☑"), Some(("☑️", 0.5)));
        assert_eq!(recognize("🐢"), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(analyze_emojis("👍")).unwrap();
        assert!(json.get("emojiCount").is_some());
        assert!(json.get("topEmojis").is_some());
        assert_eq!(json["topEmojis"][0]["emoji"], "👍");
    }
}
