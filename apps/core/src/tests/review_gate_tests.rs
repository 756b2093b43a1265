//! Review Gate Tests
//!
//! Merge readiness and the per-pull-request analysis record.

use crate::analysis::{analyze_comments, CommentCategory, ThreadAnalyzer};
use crate::review::{analyze_pull_request, assess_reviews, Review, ReviewState};

#[cfg(test)]
mod gate_tests {
    use super::*;

    #[test]
    fn test_single_approval_unlocks_merge() {
        let reviews = vec![
            Review::new(ReviewState::ChangesRequested, "This is wrong"),
            Review::new(ReviewState::ChangesRequested, "Agree, needs work"),
            Review::new(ReviewState::Approved, "LGTM"),
        ];
        let readiness = assess_reviews(&reviews);
        assert_eq!(readiness.approvals, 1);
        assert_eq!(readiness.changes, 2);
        assert!(readiness.can_merge);
    }

    #[test]
    fn test_comments_only_do_not_unlock_merge() {
        let reviews = vec![
            Review::new(ReviewState::Commented, "great work"),
            Review::new(ReviewState::Dismissed, "LGTM"),
            Review::new(ReviewState::Pending, ""),
        ];
        let readiness = assess_reviews(&reviews);
        assert_eq!(readiness.approvals, 0);
        assert_eq!(readiness.changes, 0);
        assert!(!readiness.can_merge);
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_record_embeds_thread_analysis() {
        let reviews = vec![
            Review::new(ReviewState::Approved, "LGTM, great work! 👍"),
            Review::new(
                ReviewState::ChangesRequested,
                "I have a concern about this error handling 🤔",
            ),
        ];
        let record = analyze_pull_request(&ThreadAnalyzer::new(), &reviews).unwrap();
        let summary = analyze_comments(&[
            "LGTM, great work! 👍",
            "I have a concern about this error handling 🤔",
        ])
        .unwrap();

        assert_eq!(record.sentiment, summary.overall_sentiment);
        assert_eq!(record.approvals, 1);
        assert_eq!(record.changes, 1);
        assert!(record.can_merge);
        assert_eq!(record.emoji_analysis.as_ref(), Some(&summary.emoji_analysis));

        let ml = record.ml_analysis.unwrap();
        assert_eq!(ml.top_keywords, summary.top_keywords);
        assert_eq!(
            ml.category_distribution.get(&CommentCategory::Concern),
            Some(&1)
        );
    }

    #[test]
    fn test_blank_bodies_are_skipped() {
        let reviews = vec![
            Review {
                state: ReviewState::Approved,
                body: None,
            },
            Review::new(ReviewState::Commented, "  "),
            Review::new(ReviewState::Commented, "nice 🎉"),
        ];
        let record = analyze_pull_request(&ThreadAnalyzer::new(), &reviews).unwrap();
        let ml = record.ml_analysis.unwrap();
        assert_eq!(ml.category_distribution.values().sum::<usize>(), 1);
        assert_eq!(record.sentiment, 1.0);
    }

    #[test]
    fn test_reviews_without_text_have_no_analysis() {
        let reviews = vec![Review {
            state: ReviewState::Approved,
            body: None,
        }];
        let record = analyze_pull_request(&ThreadAnalyzer::new(), &reviews).unwrap();
        assert_eq!(record.sentiment, 0.0);
        assert!(record.can_merge);
        assert!(record.emoji_analysis.is_none());
        assert!(record.ml_analysis.is_none());

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("emojiAnalysis").is_none());
        assert!(json.get("mlAnalysis").is_none());
        assert_eq!(json["canMerge"], true);
    }

    #[test]
    fn test_record_wire_shape() {
        let reviews = vec![Review::new(ReviewState::Approved, "Looks good")];
        let record = analyze_pull_request(&ThreadAnalyzer::new(), &reviews).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["approvals"], 1);
        assert_eq!(json["changes"], 0);
        assert!(json["mlAnalysis"]["overallSentiment"].is_number());
        assert!(json["mlAnalysis"]["categoryDistribution"].is_object());
        assert!(json["emojiAnalysis"]["topEmojis"].is_array());
    }
}
