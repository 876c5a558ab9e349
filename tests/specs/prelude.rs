//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the proctor binary against temp
//! projects with generated snapshots.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::Path;
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the proctor binary
pub fn proctor_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("proctor"))
}

/// Run a command, asserting exit code 0.
pub fn run_passes(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected success, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Run a command, asserting the exact exit code.
pub fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a command run for chaining assertions
pub struct RunAssert {
    pub output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be valid JSON")
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    ///
    /// ```ignore
    /// .stdout_has("verdict: pass")  // contains
    /// .stdout_has(predicates::str::is_match(r"successRate: \d+%").unwrap())
    /// ```
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
///
/// Reduces boilerplate by:
/// - Auto-creating parent directories
/// - Adding `version = 1` prefix to config
/// - Panicking on errors (we're in tests)
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project holding a snapshot with the given tallies
    pub fn with_snapshot(passed: usize, failed: usize, skipped: usize) -> Self {
        let temp = Self::empty();
        temp.results(&snapshot(passed, failed, skipped));
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write proctor.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("proctor.toml"), content).unwrap();
    }

    /// Write results.json
    pub fn results(&self, content: &str) {
        std::fs::write(self.dir.path().join("results.json"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// Build a valid snapshot with one suite and the given tallies.
///
/// Failed outcomes carry "connection refused" error text so the analysis
/// has something to categorize. The summary rate is computed the same way
/// the collector computes it.
pub fn snapshot(passed: usize, failed: usize, skipped: usize) -> String {
    let mut outcomes = Vec::new();
    for i in 0..passed {
        outcomes.push(serde_json::json!({
            "name": format!("check {}", i + 1),
            "status": "passed",
            "recordedAt": "2026-08-25T12:00:01Z",
        }));
    }
    for i in 0..failed {
        outcomes.push(serde_json::json!({
            "name": format!("broken check {}", i + 1),
            "status": "failed",
            "details": { "error": "connection refused" },
            "recordedAt": "2026-08-25T12:00:02Z",
        }));
    }
    for i in 0..skipped {
        outcomes.push(serde_json::json!({
            "name": format!("deferred check {}", i + 1),
            "status": "skipped",
            "recordedAt": "2026-08-25T12:00:03Z",
        }));
    }

    let total = passed + failed + skipped;
    let rate = if total == 0 {
        0
    } else {
        ((passed as f64 / total as f64) * 100.0).round() as u8
    };

    let doc = serde_json::json!({
        "version": 1,
        "summary": {
            "total": total,
            "passed": passed,
            "failed": failed,
            "skipped": skipped,
            "successRate": rate,
            "startedAt": "2026-08-25T12:00:00Z",
            "endedAt": "2026-08-25T12:00:05Z",
            "durationMs": 5200,
        },
        "suites": [{
            "name": "Checkout",
            "description": "order flow",
            "outcomes": outcomes,
            "startedAt": "2026-08-25T12:00:00Z",
            "endedAt": "2026-08-25T12:00:05Z",
            "durationMs": 5200,
            "passedCount": passed,
            "failedCount": failed,
            "skippedCount": skipped,
        }],
    });
    serde_json::to_string_pretty(&doc).unwrap()
}
