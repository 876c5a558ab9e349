// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Derived analytics over a finalized result set.
//!
//! Analysis never mutates the snapshot; it is computed fresh for every
//! report and attached alongside the original data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::outcome::TestStatus;
use crate::results::ResultSet;
use crate::suite::TestSuite;

/// Failure categories, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Timeout,
    Connection,
    Authentication,
    Authorization,
    NotFound,
    ServerError,
    Other,
}

impl ErrorCategory {
    /// Classify error text into exactly one category.
    ///
    /// First match in priority order wins: a message mentioning both a
    /// timeout and a 500 counts as `Timeout`. Unmatched text lands in
    /// `Other`, never dropped.
    pub fn classify(error: &str) -> Self {
        let lower = error.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("timeout") {
            ErrorCategory::Timeout
        } else if has("connection") {
            ErrorCategory::Connection
        } else if has("401") || has("unauthorized") {
            ErrorCategory::Authentication
        } else if has("403") || has("forbidden") {
            ErrorCategory::Authorization
        } else if has("404") || has("not found") {
            ErrorCategory::NotFound
        } else if has("500") || has("internal server") {
            ErrorCategory::ServerError
        } else {
            ErrorCategory::Other
        }
    }

    /// Wire label, e.g. `server_error`.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Connection => "connection",
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Authorization => "authorization",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::ServerError => "server_error",
            ErrorCategory::Other => "other",
        }
    }
}

/// One row of the error-pattern histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPattern {
    #[serde(rename = "type")]
    pub category: ErrorCategory,
    pub count: usize,
}

/// Compact reference to a suite singled out by the analysis.
///
/// Carries enough to identify the suite without duplicating its outcome
/// list, which already sits beside the analysis in the same report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteHighlight {
    pub name: String,
    pub failed: usize,
    pub duration_ms: u64,
}

impl SuiteHighlight {
    fn of(suite: &TestSuite) -> Self {
        Self {
            name: suite.name.clone(),
            failed: suite.failed_count,
            duration_ms: suite.duration_ms,
        }
    }
}

/// Analytics derived from a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Suite with the most failures; `None` when the run has no suites.
    pub most_failed_suite: Option<SuiteHighlight>,

    /// Suite with the smallest duration; `None` when the run has no suites.
    pub fastest_suite: Option<SuiteHighlight>,

    /// Suite with the largest duration; `None` when the run has no suites.
    pub slowest_suite: Option<SuiteHighlight>,

    /// Histogram of failure categories, most frequent first.
    pub error_patterns: Vec<ErrorPattern>,
}

impl Analysis {
    /// Analyze a finalized result set. Pure and deterministic.
    ///
    /// Ties for most-failed, fastest, and slowest all resolve to the
    /// suite appearing first in `suites` order.
    pub fn of(results: &ResultSet) -> Self {
        Self {
            most_failed_suite: pick(&results.suites, |s, best| {
                s.failed_count > best.failed_count
            }),
            fastest_suite: pick(&results.suites, |s, best| s.duration_ms < best.duration_ms),
            slowest_suite: pick(&results.suites, |s, best| s.duration_ms > best.duration_ms),
            error_patterns: error_patterns(results),
        }
    }
}

/// First suite winning under `beats`; earlier suites win ties.
fn pick(
    suites: &[TestSuite],
    beats: impl Fn(&TestSuite, &TestSuite) -> bool,
) -> Option<SuiteHighlight> {
    let mut best: Option<&TestSuite> = None;
    for suite in suites {
        match best {
            Some(current) if !beats(suite, current) => {}
            _ => best = Some(suite),
        }
    }
    best.map(SuiteHighlight::of)
}

/// Count failure categories over failed outcomes carrying error text.
///
/// Sorted descending by count; equal counts keep first-seen order.
fn error_patterns(results: &ResultSet) -> Vec<ErrorPattern> {
    let mut patterns: Vec<ErrorPattern> = Vec::new();
    for suite in &results.suites {
        for outcome in &suite.outcomes {
            if outcome.status != TestStatus::Failed {
                continue;
            }
            let Some(error) = outcome.error_text().filter(|e| !e.is_empty()) else {
                continue;
            };
            let category = ErrorCategory::classify(error);
            match patterns.iter_mut().find(|p| p.category == category) {
                Some(pattern) => pattern.count += 1,
                None => patterns.push(ErrorPattern { category, count: 1 }),
            }
        }
    }
    patterns.sort_by(|a, b| b.count.cmp(&a.count));
    patterns
}

/// Report provenance attached to emitted artifacts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generator: &'static str,
    pub version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub report_format: &'static str,
}

/// Wire identifier for the enhanced JSON layout.
pub const REPORT_FORMAT: &str = "enhanced_json_v1";

impl ReportMetadata {
    fn stamped() -> Self {
        Self {
            generator: "proctor",
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            report_format: REPORT_FORMAT,
        }
    }
}

/// A result set together with its derived analytics and provenance.
///
/// Render-time only; never persisted back into the snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedReport {
    #[serde(flatten)]
    pub results: ResultSet,

    pub metadata: ReportMetadata,

    pub analysis: Analysis,
}

impl EnhancedReport {
    /// Build the report for a snapshot, stamping generation metadata now.
    pub fn new(results: ResultSet) -> Self {
        let analysis = Analysis::of(&results);
        tracing::debug!(
            suites = results.suites.len(),
            patterns = analysis.error_patterns.len(),
            "analyzed result set"
        );
        Self {
            results,
            metadata: ReportMetadata::stamped(),
            analysis,
        }
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
