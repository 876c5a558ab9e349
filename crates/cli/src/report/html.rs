// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML format report output.
//!
//! Self-contained document, no scripts. Suites render as `<details>`
//! blocks; suites with failures start expanded.

use crate::analysis::{Analysis, EnhancedReport};
use crate::outcome::{TestOutcome, TestStatus};
use crate::suite::TestSuite;

use super::{ReportFormatter, format_duration};

/// HTML format report formatter.
pub struct HtmlFormatter {
    title: String,
}

impl HtmlFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Generate CSS styles for the report.
    fn css() -> &'static str {
        r#"* { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      line-height: 1.6;
      color: #333;
      background-color: #f5f5f5;
    }
    .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
    .header {
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 30px;
      border-radius: 10px;
      margin-bottom: 20px;
    }
    .header h1 { font-size: 2.5em; margin-bottom: 5px; }
    .header .subtitle { opacity: 0.9; }
    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 15px;
      margin-bottom: 20px;
    }
    .summary-card {
      background: white;
      padding: 20px;
      border-radius: 10px;
      text-align: center;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }
    .summary-card .number { font-size: 2em; font-weight: bold; }
    .summary-card .label { color: #666; font-size: 0.9em; }
    .passed { color: #28a745; }
    .failed { color: #dc3545; }
    .skipped { color: #ffc107; }
    .total { color: #007bff; }
    .progress-bar {
      width: 100%;
      height: 8px;
      background: #e9ecef;
      border-radius: 4px;
      overflow: hidden;
      margin: 20px 0;
    }
    .progress-fill { height: 100%; background: linear-gradient(90deg, #28a745, #20c997); }
    .test-suites { display: grid; gap: 20px; }
    .test-suite {
      background: white;
      border-radius: 10px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      overflow: hidden;
    }
    .suite-header {
      padding: 20px;
      background: #f8f9fa;
      border-bottom: 1px solid #dee2e6;
      cursor: pointer;
      list-style: none;
    }
    .suite-header:hover { background: #e9ecef; }
    .suite-header h3 { margin-bottom: 5px; }
    .suite-stats { display: flex; gap: 15px; font-size: 0.9em; color: #666; }
    .suite-description { margin-top: 5px; color: #666; font-size: 0.9em; }
    .suite-content { padding: 20px; }
    .test-item {
      display: flex;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid #f0f0f0;
    }
    .test-item:last-child { border-bottom: none; }
    .test-status {
      width: 20px;
      height: 20px;
      border-radius: 50%;
      margin-right: 15px;
      display: flex;
      align-items: center;
      justify-content: center;
      font-size: 12px;
      color: white;
      font-weight: bold;
    }
    .test-status.passed { background: #28a745; }
    .test-status.failed { background: #dc3545; }
    .test-status.skipped { background: #ffc107; }
    .test-name { flex: 1; font-weight: 500; }
    .test-message { color: #666; font-size: 0.9em; margin-left: 35px; margin-top: 5px; }
    .test-error {
      background: #f8d7da;
      color: #721c24;
      padding: 10px;
      border-radius: 5px;
      margin: 10px 0 10px 35px;
      font-family: monospace;
      font-size: 0.85em;
      white-space: pre-wrap;
    }
    .metadata {
      background: white;
      padding: 20px;
      border-radius: 10px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      margin-top: 30px;
    }
    .metadata h3 { margin-bottom: 15px; color: #495057; }
    .metadata-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 15px;
    }
    .metadata-item {
      display: flex;
      justify-content: space-between;
      padding: 8px 0;
      border-bottom: 1px solid #f0f0f0;
    }
    .metadata-item:last-child { border-bottom: none; }
    .metadata-label { font-weight: 500; color: #666; }
    .metadata-value { color: #333; }
    @media (max-width: 768px) {
      .container { padding: 10px; }
      .summary { grid-template-columns: repeat(2, 1fr); }
    }"#
    }

    /// Render a summary card.
    fn render_summary_card(value: &str, label: &str, category: &str) -> String {
        format!(
            r#"      <div class="summary-card">
        <div class="number {category}">{value}</div>
        <div class="label">{label}</div>
      </div>"#
        )
    }

    /// Render a single test outcome row.
    fn render_outcome(outcome: &TestOutcome) -> String {
        let mut html = format!(
            r#"          <div class="test-item">
            <div class="test-status {status}">{icon}</div>
            <div class="test-name">{name}</div>
          </div>"#,
            status = outcome.status.label(),
            icon = outcome.status.icon(),
            name = escape_html(&outcome.name),
        );

        if let Some(ref message) = outcome.message {
            html.push('\n');
            html.push_str(&format!(
                r#"          <div class="test-message">{}</div>"#,
                escape_html(message)
            ));
        }

        if outcome.status == TestStatus::Failed {
            if let Some(error) = outcome.error_text() {
                html.push('\n');
                html.push_str(&format!(
                    r#"          <div class="test-error">{}</div>"#,
                    escape_html(error)
                ));
            }
        }

        html
    }

    /// Render a suite as a collapsible block.
    fn render_suite(suite: &TestSuite) -> String {
        let (class, open) = if suite.has_failures() {
            ("test-suite has-failures", " open")
        } else {
            ("test-suite", "")
        };

        let outcomes = suite
            .outcomes
            .iter()
            .map(Self::render_outcome)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"      <details class="{class}"{open}>
        <summary class="suite-header">
          <h3>{name}</h3>
          <div class="suite-stats">
            <span class="passed">✓ {passed}</span>
            <span class="failed">✗ {failed}</span>
            <span class="skipped">⏭ {skipped}</span>
            <span>⏱ {duration}</span>
          </div>
          <div class="suite-description">{description}</div>
        </summary>
        <div class="suite-content">
{outcomes}
        </div>
      </details>"#,
            name = escape_html(&suite.name),
            passed = suite.passed_count,
            failed = suite.failed_count,
            skipped = suite.skipped_count,
            duration = format_duration(suite.duration_ms),
            description = escape_html(&suite.description),
        )
    }

    /// Render a label/value row for the metadata grid.
    fn render_metadata_item(label: &str, value: &str) -> String {
        format!(
            r#"        <div class="metadata-item">
          <span class="metadata-label">{label}</span>
          <span class="metadata-value">{value}</span>
        </div>"#
        )
    }

    /// Render the analysis section, or nothing when there is nothing to say.
    fn render_analysis(analysis: &Analysis) -> String {
        let mut items = Vec::new();

        if let Some(ref suite) = analysis.most_failed_suite {
            items.push(Self::render_metadata_item(
                "Most failures",
                &format!("{} ({})", escape_html(&suite.name), suite.failed),
            ));
        }
        if let Some(ref suite) = analysis.fastest_suite {
            items.push(Self::render_metadata_item(
                "Fastest suite",
                &format!(
                    "{} ({})",
                    escape_html(&suite.name),
                    format_duration(suite.duration_ms)
                ),
            ));
        }
        if let Some(ref suite) = analysis.slowest_suite {
            items.push(Self::render_metadata_item(
                "Slowest suite",
                &format!(
                    "{} ({})",
                    escape_html(&suite.name),
                    format_duration(suite.duration_ms)
                ),
            ));
        }
        for pattern in &analysis.error_patterns {
            items.push(Self::render_metadata_item(
                &format!("Errors: {}", pattern.category.label()),
                &pattern.count.to_string(),
            ));
        }

        if items.is_empty() {
            return String::new();
        }

        format!(
            r#"    <div class="metadata">
      <h3>Analysis</h3>
      <div class="metadata-grid">
{items}
      </div>
    </div>

"#,
            items = items.join("\n")
        )
    }

    /// Render the complete HTML document.
    fn render_document(&self, report: &EnhancedReport) -> String {
        let summary = &report.results.summary;
        let title = escape_html(&self.title);
        let generated = report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC");
        let css = Self::css();

        let cards = [
            Self::render_summary_card(&summary.total.to_string(), "Total", "total"),
            Self::render_summary_card(&summary.passed.to_string(), "Passed", "passed"),
            Self::render_summary_card(&summary.failed.to_string(), "Failed", "failed"),
            Self::render_summary_card(&summary.skipped.to_string(), "Skipped", "skipped"),
            Self::render_summary_card(&format!("{}%", summary.success_rate), "Success rate", "total"),
            Self::render_summary_card(&format_duration(summary.duration_ms), "Duration", "total"),
        ]
        .join("\n");

        let suites = report
            .results
            .suites
            .iter()
            .map(Self::render_suite)
            .collect::<Vec<_>>()
            .join("\n");

        let analysis = Self::render_analysis(&report.analysis);

        let run_details = [
            Self::render_metadata_item(
                "Started",
                &summary.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            Self::render_metadata_item(
                "Ended",
                &summary.ended_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            Self::render_metadata_item("Duration", &format!("{}ms", summary.duration_ms)),
            Self::render_metadata_item("Suites", &report.results.suites.len().to_string()),
            Self::render_metadata_item(
                "Generator",
                &format!("{} v{}", report.metadata.generator, report.metadata.version),
            ),
        ]
        .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{title}</h1>
      <div class="subtitle">Generated {generated}</div>
    </div>

    <div class="summary">
{cards}
    </div>

    <div class="progress-bar">
      <div class="progress-fill" style="width: {rate}%"></div>
    </div>

    <div class="test-suites">
{suites}
    </div>

{analysis}    <div class="metadata">
      <h3>Run Details</h3>
      <div class="metadata-grid">
{run_details}
      </div>
    </div>
  </div>
</body>
</html>"#,
            rate = summary.success_rate,
        )
    }
}

/// Size estimation constants for pre-allocation.
const HTML_BASE_SIZE: usize = 5000; // Template + CSS
const HTML_SUITE_SIZE: usize = 700;
const HTML_ROW_SIZE: usize = 180;

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &EnhancedReport) -> anyhow::Result<String> {
        // Pre-allocate buffer based on estimated size
        let capacity = HTML_BASE_SIZE
            + report.results.suites.len() * HTML_SUITE_SIZE
            + report.results.summary.total * HTML_ROW_SIZE;
        let mut output = String::with_capacity(capacity);
        output.push_str(&self.render_document(report));
        Ok(output)
    }
}

/// Escape text for embedding in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
