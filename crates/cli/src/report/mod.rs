// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Turns an enhanced report into text, JSON, or HTML output.

mod html;
mod json;
mod text;

use crate::analysis::EnhancedReport;
use crate::cli::OutputFormat;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Default report title for HTML and text output.
pub const DEFAULT_TITLE: &str = "Integration Test Report";

/// Rendering options shared by the formatters.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Report title for HTML and text output.
    pub title: String,

    /// Single-line JSON output.
    pub compact: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            compact: false,
        }
    }
}

/// Trait for formatting an enhanced report into an output format.
pub trait ReportFormatter {
    /// Render the report into the target format.
    fn format(&self, report: &EnhancedReport) -> anyhow::Result<String>;
}

/// Create formatter based on output format.
fn create_formatter(format: OutputFormat, options: &RenderOptions) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(&options.title)),
        OutputFormat::Json => Box::new(JsonFormatter::new(options.compact)),
        OutputFormat::Html => Box::new(HtmlFormatter::new(&options.title)),
    }
}

/// Render a report in the requested output format.
pub fn format_report(
    format: OutputFormat,
    report: &EnhancedReport,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    create_formatter(format, options).format(report)
}

/// Format a millisecond duration for humans.
///
/// Sub-second durations keep millisecond precision, sub-minute durations
/// get one decimal of seconds, anything longer is minutes and whole
/// seconds.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        format!("{}m {}s", minutes, seconds)
    }
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
