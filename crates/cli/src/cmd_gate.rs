// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gate command implementation.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use proctor::cli::{Cli, GateArgs};
use proctor::color::{resolve_color, scheme};
use proctor::config;
use proctor::discovery;
use proctor::error::{Error, ExitCode};
use proctor::results::ResultSet;
use proctor::verdict::{Verdict, VerdictThresholds};

/// Run the gate command.
pub fn run(cli: &Cli, args: &GateArgs) -> anyhow::Result<ExitCode> {
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

    // Thresholds: CLI flag > config > built-in default, validated as a pair
    let pass = args.pass_threshold.unwrap_or(config.gate.pass);
    let warn = args.warn_threshold.unwrap_or(config.gate.warn);
    let thresholds = VerdictThresholds::new(pass, warn).map_err(Error::from)?;

    let snapshot = ResultSet::load(&input_path).map_err(Error::from)?;
    tracing::debug!(
        "loaded {} suites from {}",
        snapshot.suites.len(),
        input_path.display()
    );
    let rate = snapshot.summary.success_rate;
    let verdict = thresholds.verdict(rate);
    tracing::debug!(rate, verdict = verdict.label(), "gate evaluated");

    print_verdict(verdict, rate, &thresholds)?;

    let exit = match verdict {
        Verdict::Pass => ExitCode::Success,
        // Warn flags degradation without breaking the build, unless --strict
        Verdict::Warn if args.strict => ExitCode::GateFailed,
        Verdict::Warn => ExitCode::Success,
        Verdict::Fail => ExitCode::GateFailed,
    };
    Ok(exit)
}

/// Print the verdict line and the rate against its thresholds.
fn print_verdict(
    verdict: Verdict,
    rate: u8,
    thresholds: &VerdictThresholds,
) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(resolve_color());

    write!(stdout, "verdict: ")?;
    let spec = match verdict {
        Verdict::Pass => scheme::pass(),
        Verdict::Warn => scheme::warn(),
        Verdict::Fail => scheme::fail(),
    };
    stdout.set_color(&spec)?;
    write!(stdout, "{}", verdict.label())?;
    stdout.reset()?;
    writeln!(stdout)?;

    write!(stdout, "successRate: ")?;
    stdout.set_color(&scheme::figure())?;
    write!(stdout, "{}%", rate)?;
    stdout.reset()?;
    writeln!(
        stdout,
        " (pass >= {}, warn >= {})",
        thresholds.pass, thresholds.warn
    )?;

    Ok(())
}
