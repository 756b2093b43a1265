//! Diagnostic Checks Module
//!
//! Runs known inputs through a configured analyzer and reports which
//! components behave as expected. Backs the `selfcheck` command.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::analysis::{CommentCategory, ThreadAnalyzer};
use crate::error::AnalysisError;
use crate::review::{assess_reviews, Review, ReviewState};

const CATEGORIES: [&str; 5] = ["emoji", "sentiment", "category", "aggregate", "gate"];

// --- Check Result Types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub category: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub message: String,
}

impl CheckResult {
    fn pass(name: &str, category: &str, duration: Duration, message: &str) -> Self {
        Self::new(name, category, duration, message, true)
    }

    fn fail(name: &str, category: &str, duration: Duration, message: &str) -> Self {
        Self::new(name, category, duration, message, false)
    }

    fn new(name: &str, category: &str, duration: Duration, message: &str, passed: bool) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            passed,
            duration_ms: duration.as_millis() as u64,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_ms: u64,
    pub results: Vec<CheckResult>,
    pub categories: Vec<CategorySummary>,
}

impl DiagnosticReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub passed: usize,
    pub failed: usize,
}

// --- Runner ---

/// Run every check against `analyzer`
pub fn run_diagnostics(analyzer: &ThreadAnalyzer) -> DiagnosticReport {
    info!("Running analyzer self-check");

    let start = Instant::now();
    let checks: [fn(&ThreadAnalyzer) -> CheckResult; 9] = [
        check_emoji_reference,
        check_emoji_ascii_digits,
        check_sentiment_positive,
        check_sentiment_empty,
        check_category_empty,
        check_category_suggestion,
        check_aggregate_reference,
        check_aggregate_empty,
        check_gate_single_approval,
    ];

    let results: Vec<CheckResult> = checks
        .iter()
        .map(|check| {
            let result = check(analyzer);
            if result.passed {
                info!("  ✅ {} - {} ({}ms)", result.name, result.message, result.duration_ms);
            } else {
                error!("  ❌ {} - {} ({}ms)", result.name, result.message, result.duration_ms);
            }
            result
        })
        .collect();

    let total_checks = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    let categories = CATEGORIES
        .iter()
        .map(|&cat| {
            let in_cat = results.iter().filter(|r| r.category == cat);
            let (ok, ko): (Vec<_>, Vec<_>) = in_cat.partition(|r| r.passed);
            CategorySummary {
                name: cat.to_string(),
                passed: ok.len(),
                failed: ko.len(),
            }
        })
        .collect();

    let report = DiagnosticReport {
        total_checks,
        passed,
        failed: total_checks - passed,
        total_duration_ms: start.elapsed().as_millis() as u64,
        results,
        categories,
    };

    info!(
        "Self-check: {}/{} passed | {} failed | {}ms total",
        report.passed, report.total_checks, report.failed, report.total_duration_ms
    );

    report
}

// --- Emoji ---

fn check_emoji_reference(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("emoji_reference", "emoji");

    let result = analyzer.emoji_scorer().analyze("Nice work 👍👍🎉");
    let top_ok = result
        .top_emojis
        .first()
        .is_some_and(|e| e.emoji == "👍" && e.count == 2);

    if result.score == 1.0 && result.emoji_count == 3 && top_ok {
        CheckResult::pass(name, category, start.elapsed(), "score 1.0, 3 glyphs")
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("score {}, {} glyphs", result.score, result.emoji_count),
        )
    }
}

fn check_emoji_ascii_digits(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("emoji_ascii_digits", "emoji");

    let result = analyzer.emoji_scorer().analyze("Fixed in 3 commits, see #42");
    if result.emoji_count == 0 && result.score == 0.0 {
        CheckResult::pass(name, category, start.elapsed(), "no glyphs found")
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("{} glyphs found in plain text", result.emoji_count),
        )
    }
}

// --- Sentiment ---

fn check_sentiment_positive(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("sentiment_positive", "sentiment");

    let analysis = analyzer.comment_analyzer().analyze("LGTM, great work!");
    if analysis.sentiment > 0.0 {
        CheckResult::pass(
            name,
            category,
            start.elapsed(),
            &format!("sentiment {:+.2}", analysis.sentiment),
        )
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("expected positive, got {:+.2}", analysis.sentiment),
        )
    }
}

fn check_sentiment_empty(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("sentiment_empty", "sentiment");

    let analysis = analyzer.comment_analyzer().analyze("");
    if analysis.sentiment == 0.0 && analysis.keywords.is_empty() {
        CheckResult::pass(name, category, start.elapsed(), "neutral")
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("expected 0, got {:+.2}", analysis.sentiment),
        )
    }
}

// --- Category ---

fn check_category_empty(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("category_empty", "category");

    let analysis = analyzer.comment_analyzer().analyze("");
    if analysis.category == CommentCategory::Approval && analysis.confidence == 0.0 {
        CheckResult::pass(name, category, start.elapsed(), "approval, confidence 0")
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("got {} ({})", analysis.category, analysis.confidence),
        )
    }
}

fn check_category_suggestion(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("category_suggestion", "category");

    let analysis = analyzer
        .comment_analyzer()
        .analyze("I think we should consider an alternative approach");
    if analysis.category == CommentCategory::Suggestion && analysis.confidence > 0.0 {
        CheckResult::pass(
            name,
            category,
            start.elapsed(),
            &format!("suggestion ({:.2})", analysis.confidence),
        )
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("expected suggestion, got {}", analysis.category),
        )
    }
}

// --- Aggregate ---

fn check_aggregate_reference(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("aggregate_reference", "aggregate");

    let comments = [
        "LGTM, great work! 👍",
        "I have a concern about this error handling 🤔",
    ];
    match analyzer.analyze(&comments) {
        Ok(summary) => {
            let dist = &summary.category_distribution;
            let shape_ok = dist.len() == 2
                && dist.get(&CommentCategory::Approval) == Some(&1)
                && dist.get(&CommentCategory::Concern) == Some(&1);
            if shape_ok && summary.emoji_analysis.emoji_count == 2 {
                CheckResult::pass(name, category, start.elapsed(), &summary.summary_line())
            } else {
                CheckResult::fail(name, category, start.elapsed(), &summary.summary_line())
            }
        }
        Err(e) => CheckResult::fail(name, category, start.elapsed(), &e.to_string()),
    }
}

fn check_aggregate_empty(analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("aggregate_empty", "aggregate");

    let comments: [&str; 0] = [];
    match analyzer.analyze(&comments) {
        Err(AnalysisError::EmptyInput) => {
            CheckResult::pass(name, category, start.elapsed(), "empty thread rejected")
        }
        Err(e) => CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!("unexpected error: {}", e),
        ),
        Ok(_) => CheckResult::fail(name, category, start.elapsed(), "empty thread accepted"),
    }
}

// --- Gate ---

fn check_gate_single_approval(_analyzer: &ThreadAnalyzer) -> CheckResult {
    let start = Instant::now();
    let (name, category) = ("gate_single_approval", "gate");

    let reviews = [
        Review::new(ReviewState::ChangesRequested, "Please rename this"),
        Review::new(ReviewState::Approved, "Ship it"),
    ];
    let readiness = assess_reviews(&reviews);
    let blocked = assess_reviews(&reviews[..1]);

    if readiness.can_merge && !blocked.can_merge {
        CheckResult::pass(name, category, start.elapsed(), "one approval unlocks merge")
    } else {
        CheckResult::fail(
            name,
            category,
            start.elapsed(),
            &format!(
                "can_merge {} with approval, {} without",
                readiness.can_merge, blocked.can_merge
            ),
        )
    }
}
