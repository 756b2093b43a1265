//! Property Tests
//!
//! Invariants of the scorers over generated comments.

use proptest::prelude::*;

use crate::analysis::{
    analyze_comment, analyze_comments, analyze_emojis, classify, score_sentiment,
    CommentCategory,
};

/// Comment-like text mixing lexicon words, category keywords, emoji and noise
fn comment_text() -> impl Strategy<Value = String> {
    let known = prop::sample::select(vec![
        "great", "bad", "lgtm", "why", "maybe", "bug", "not", "👍", "🎉", "🐢", "❌", "🤔",
        "👩\u{200D}💻",
    ])
    .prop_map(|s| s.to_string());
    let word = prop_oneof![known, "[a-z0-9#?!,.]{1,8}"];
    prop::collection::vec(word, 0..24).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn emoji_score_is_bounded(text in comment_text()) {
        let result = analyze_emojis(&text);
        prop_assert!((-1.0..=1.0).contains(&result.score));
        if result.emoji_count == 0 {
            prop_assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn top_emojis_never_exceed_glyph_count(text in comment_text()) {
        let result = analyze_emojis(&text);
        let listed: usize = result.top_emojis.iter().map(|e| e.count).sum();
        prop_assert!(listed <= result.emoji_count);
        prop_assert!(result.top_emojis.len() <= 3);
        prop_assert!(result.top_emojis.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn comment_analysis_is_bounded(text in comment_text()) {
        let analysis = analyze_comment(&text);
        prop_assert!((-1.0..=1.0).contains(&analysis.sentiment));
        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
        prop_assert!(analysis.keywords.len() <= 5);
    }

    #[test]
    fn scorers_are_idempotent(text in comment_text()) {
        prop_assert_eq!(analyze_emojis(&text), analyze_emojis(&text));
        prop_assert_eq!(score_sentiment(&text), score_sentiment(&text));
        prop_assert_eq!(classify(&text), classify(&text));
        prop_assert_eq!(analyze_comment(&text), analyze_comment(&text));
    }

    #[test]
    fn appending_praise_never_lowers_sentiment(text in comment_text()) {
        let before = analyze_comment(&text).sentiment;
        let after = analyze_comment(&format!("{} great", text)).sentiment;
        prop_assert!(after >= before, "{} -> {}", before, after);
    }

    #[test]
    fn distribution_counts_every_comment(
        comments in prop::collection::vec(comment_text(), 1..12)
    ) {
        let summary = analyze_comments(&comments).unwrap();
        prop_assert_eq!(summary.comment_count(), comments.len());
        prop_assert!((-1.0..=1.0).contains(&summary.overall_sentiment));
        prop_assert!(summary.top_keywords.len() <= 10);
        prop_assert!(summary
            .category_distribution
            .keys()
            .all(|c| CommentCategory::ALL.contains(c)));
    }
}
