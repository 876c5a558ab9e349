// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use crate::analysis::EnhancedReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// If `compact` is true, outputs single-line JSON without whitespace.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &EnhancedReport) -> anyhow::Result<String> {
        if self.compact {
            Ok(serde_json::to_string(report)?)
        } else {
            Ok(serde_json::to_string_pretty(report)?)
        }
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
