// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{Error, Result};

/// Collects integration test results and renders reports and CI gates
#[derive(Parser)]
#[command(name = "proctor")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PROCTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a report from a results snapshot
    Report(ReportArgs),
    /// Check a results snapshot against success-rate thresholds
    Gate(GateArgs),
}

#[derive(clap::Args, Default)]
pub struct ReportArgs {
    /// Results snapshot to read (default: results.json)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format or file path (e.g., text, json, html, report.html)
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Output compact JSON (no whitespace, single line)
    #[arg(long)]
    pub compact: bool,

    /// Report title for HTML and text output
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,
}

impl ReportArgs {
    /// Parse output argument into format and optional file path.
    pub fn output_target(&self) -> Result<(OutputFormat, Option<PathBuf>)> {
        let val = self.output.to_lowercase();

        // Check for file extension
        if val.ends_with(".html") {
            Ok((OutputFormat::Html, Some(PathBuf::from(&self.output))))
        } else if val.ends_with(".json") {
            Ok((OutputFormat::Json, Some(PathBuf::from(&self.output))))
        } else if val.ends_with(".txt") {
            Ok((OutputFormat::Text, Some(PathBuf::from(&self.output))))
        } else {
            // Parse as format name
            let format = match val.as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                "html" => OutputFormat::Html,
                other => {
                    return Err(Error::Argument(format!("unknown output format: {other}")));
                }
            };
            Ok((format, None))
        }
    }
}

#[derive(clap::Args, Default)]
pub struct GateArgs {
    /// Results snapshot to read (default: results.json)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Success rate required to pass (0-100)
    #[arg(long, value_name = "N")]
    pub pass_threshold: Option<u8>,

    /// Success rate at which a failing run warns instead (0-100)
    #[arg(long, value_name = "N")]
    pub warn_threshold: Option<u8>,

    /// Treat a warn verdict as failure
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
