//! Test outcome types shared by the collector and the report pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// Status marker used by the text and HTML renderers.
    pub fn icon(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed => "✗",
            TestStatus::Skipped => "⏭",
        }
    }

    /// Wire name, also used as a CSS class in HTML output.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
        }
    }
}

/// Structured payload attached to an outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDetails {
    /// Error text for failed checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The recorded result of one individual check.
///
/// Created exactly once when the driver reports an outcome; never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    /// Check name. Duplicates within a suite are legal (retried checks).
    pub name: String,

    /// Terminal status.
    pub status: TestStatus,

    /// Optional human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Optional structured payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<OutcomeDetails>,

    /// Capture timestamp.
    pub recorded_at: DateTime<Utc>,
}

impl TestOutcome {
    /// Create an outcome with the given status, stamped now.
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            status,
            message: None,
            details: None,
            recorded_at: Utc::now(),
        }
    }

    /// Create a passed outcome.
    pub fn passed(name: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Passed)
    }

    /// Create a failed outcome.
    pub fn failed(name: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Failed)
    }

    /// Create a skipped outcome.
    pub fn skipped(name: impl Into<String>) -> Self {
        Self::new(name, TestStatus::Skipped)
    }

    /// Attach a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach error text to the details payload.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.details.get_or_insert_with(OutcomeDetails::default).error = Some(error.into());
        self
    }

    /// Error text from the details payload, if any.
    pub fn error_text(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.error.as_deref())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
