// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! Summary counters are one `key: value` per line so CI scripts can grep
//! them without a JSON parser.

use std::fmt::Write;

use crate::analysis::EnhancedReport;
use crate::outcome::TestStatus;

use super::{ReportFormatter, format_duration};

/// Text format report formatter.
pub struct TextFormatter {
    title: String,
}

/// Size estimation constants for pre-allocation.
const TEXT_HEADER_SIZE: usize = 160;
const TEXT_ROW_SIZE: usize = 60;

impl TextFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn write_to_fmt(&self, output: &mut String, report: &EnhancedReport) -> anyhow::Result<()> {
        let summary = &report.results.summary;

        // Header
        writeln!(output, "{}", self.title)?;
        writeln!(output, "{}", "=".repeat(self.title.len()))?;
        let generated = report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC");
        writeln!(output, "Generated: {}", generated)?;
        writeln!(output)?;

        // Greppable counters
        writeln!(output, "total: {}", summary.total)?;
        writeln!(output, "passed: {}", summary.passed)?;
        writeln!(output, "failed: {}", summary.failed)?;
        writeln!(output, "skipped: {}", summary.skipped)?;
        writeln!(output, "successRate: {}%", summary.success_rate)?;
        writeln!(output, "duration: {}", format_duration(summary.duration_ms))?;

        // Suites
        for suite in &report.results.suites {
            writeln!(output)?;
            writeln!(
                output,
                "{}: {}/{} passed ({})",
                suite.name,
                suite.passed_count,
                suite.total(),
                format_duration(suite.duration_ms)
            )?;
            for outcome in &suite.outcomes {
                writeln!(output, "  {} {}", outcome.status.icon(), outcome.name)?;
                if outcome.status == TestStatus::Failed {
                    if let Some(error) = outcome.error_text() {
                        writeln!(output, "      {}", error)?;
                    }
                }
            }
        }

        // Error patterns
        if !report.analysis.error_patterns.is_empty() {
            writeln!(output)?;
            writeln!(output, "error patterns:")?;
            for pattern in &report.analysis.error_patterns {
                writeln!(output, "  {}: {}", pattern.category.label(), pattern.count)?;
            }
        }

        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &EnhancedReport) -> anyhow::Result<String> {
        // Pre-allocate buffer based on estimated size
        let capacity = TEXT_HEADER_SIZE + report.results.summary.total * TEXT_ROW_SIZE;
        let mut output = String::with_capacity(capacity);
        self.write_to_fmt(&mut output, report)?;
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
