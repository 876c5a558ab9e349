// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite grouping for test outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::outcome::{TestOutcome, TestStatus};

/// A named grouping of related test outcomes with its own timing window.
///
/// The tallies are maintained in lockstep with `outcomes`: after every
/// `record` call, `passed_count + failed_count + skipped_count` equals
/// `outcomes.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub name: String,
    pub description: String,

    /// Outcomes in execution order.
    pub outcomes: Vec<TestOutcome>,

    pub started_at: DateTime<Utc>,

    /// Set when the suite is closed; open suites have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    pub duration_ms: u64,

    pub passed_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
}

impl TestSuite {
    /// Open a new suite stamped now.
    pub fn open(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            outcomes: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: 0,
            passed_count: 0,
            failed_count: 0,
            skipped_count: 0,
        }
    }

    /// Append an outcome and bump the matching tally.
    pub fn record(&mut self, outcome: TestOutcome) {
        match outcome.status {
            TestStatus::Passed => self.passed_count += 1,
            TestStatus::Failed => self.failed_count += 1,
            TestStatus::Skipped => self.skipped_count += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Close the suite, stamping `ended_at` and the measured duration.
    pub fn close(&mut self, duration_ms: u64) {
        self.ended_at = Some(Utc::now());
        self.duration_ms = duration_ms;
    }

    /// Total outcomes recorded.
    pub fn total(&self) -> usize {
        self.passed_count + self.failed_count + self.skipped_count
    }

    /// Whether any recorded outcome failed.
    pub fn has_failures(&self) -> bool {
        self.failed_count > 0
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
