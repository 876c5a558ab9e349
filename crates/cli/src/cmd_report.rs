// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use proctor::EnhancedReport;
use proctor::cli::{Cli, OutputFormat, ReportArgs};
use proctor::config;
use proctor::discovery;
use proctor::error::Error;
use proctor::report::{self, RenderOptions};
use proctor::results::{self, ResultSet};

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    // Find and load config
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd).map_err(Error::from)?
    {
        Some(path) => config::load_with_warnings(&path).map_err(Error::from)?,
        None => config::Config::default(),
    };

    // Determine input path (CLI flag overrides config)
    let input_path = args
        .input
        .clone()
        .unwrap_or_else(|| cwd.join(&config.report.input));

    // Parse output target (format and optional file path)
    let (format, file_path) = args.output_target()?;

    // Validate --compact flag (only applies to JSON)
    if args.compact && !matches!(format, OutputFormat::Json) {
        eprintln!("warning: --compact only applies to JSON output, ignoring");
    }

    let snapshot = ResultSet::load(&input_path).map_err(Error::from)?;
    tracing::debug!(
        "loaded {} suites from {}",
        snapshot.suites.len(),
        input_path.display()
    );
    let enhanced = EnhancedReport::new(snapshot);

    let options = RenderOptions {
        title: args
            .title
            .clone()
            .unwrap_or_else(|| config.report.title.clone()),
        compact: args.compact,
    };
    let output = report::format_report(format, &enhanced, &options)?;
    tracing::debug!("rendered report ({} bytes)", output.len());

    match file_path {
        Some(path) => {
            // Written whole-or-not-at-all; CI consumers poll for this file
            results::write_atomic(&path, &output).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(output.as_bytes())?;
            // Add trailing newline for JSON output
            if matches!(format, OutputFormat::Json) {
                writeln!(handle)?;
            }
        }
    }
    Ok(())
}
