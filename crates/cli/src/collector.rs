// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite lifecycle and result accumulation.
//!
//! One driver feeds the collector serially: open a suite, record outcomes
//! into it, close it, repeat, then finalize to take an immutable snapshot
//! of the whole run.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::outcome::{TestOutcome, TestStatus};
use crate::results::{RESULTS_VERSION, ResultSet, RunSummary};
use crate::suite::TestSuite;

/// Accumulates test outcomes under named suites.
///
/// At most one suite is open at a time. Closed suites are appended in
/// order; `finalize` produces the run snapshot.
#[derive(Debug)]
pub struct ResultCollector {
    suites: Vec<TestSuite>,
    current: Option<OpenSuite>,
    passed: usize,
    failed: usize,
    skipped: usize,
    started_at: DateTime<Utc>,
    started: Instant,
}

#[derive(Debug)]
struct OpenSuite {
    suite: TestSuite,
    opened: Instant,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self {
            suites: Vec::new(),
            current: None,
            passed: 0,
            failed: 0,
            skipped: 0,
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Open a new suite. Fails if one is already open.
    pub fn start_suite(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), CollectorError> {
        if let Some(open) = &self.current {
            return Err(CollectorError::SuiteAlreadyOpen {
                open: open.suite.name.clone(),
            });
        }
        let suite = TestSuite::open(name, description);
        tracing::debug!(suite = %suite.name, "opening suite");
        self.current = Some(OpenSuite {
            suite,
            opened: Instant::now(),
        });
        Ok(())
    }

    /// Record an outcome into the open suite.
    ///
    /// Fails when no suite is open; the outcome is never silently dropped.
    pub fn add_test(&mut self, outcome: TestOutcome) -> Result<(), CollectorError> {
        let Some(open) = self.current.as_mut() else {
            return Err(CollectorError::NoOpenSuite {
                outcome: outcome.name,
            });
        };
        match outcome.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
        }
        open.suite.record(outcome);
        Ok(())
    }

    /// Close the open suite and append it to the run.
    ///
    /// Returns the closed suite, or `None` when nothing is open. The
    /// empty case is a no-op rather than an error so failure-tolerant
    /// driver loops can close unconditionally.
    pub fn end_suite(&mut self) -> Option<&TestSuite> {
        let mut open = self.current.take()?;
        let elapsed = open.opened.elapsed().as_millis() as u64;
        open.suite.close(elapsed);
        self.suites.push(open.suite);
        self.suites.last()
    }

    /// Name of the currently open suite, if any.
    pub fn open_suite(&self) -> Option<&str> {
        self.current.as_ref().map(|o| o.suite.name.as_str())
    }

    /// Total outcomes recorded so far.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Whether any recorded outcome failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Produce the finalized snapshot.
    ///
    /// Callable multiple times; each call stamps `endedAt` and the run
    /// duration at the time of the call. A suite still open is not part
    /// of the snapshot until it is closed.
    pub fn finalize(&self) -> ResultSet {
        let total = self.total();
        ResultSet {
            version: RESULTS_VERSION,
            summary: RunSummary {
                total,
                passed: self.passed,
                failed: self.failed,
                skipped: self.skipped,
                success_rate: RunSummary::rate(self.passed, total),
                started_at: self.started_at,
                ended_at: Utc::now(),
                duration_ms: self.started.elapsed().as_millis() as u64,
            },
            suites: self.suites.clone(),
        }
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver-usage errors. These indicate a bug in the calling test driver
/// and are not recoverable.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectorError {
    #[error("no test suite is open (outcome {outcome:?} was not recorded)")]
    NoOpenSuite { outcome: String },

    #[error("suite {open:?} is still open; close it before starting another")]
    SuiteAlreadyOpen { open: String },
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
