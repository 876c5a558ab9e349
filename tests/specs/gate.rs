//! Behavioral specs for the gate command.
//!
//! The gate maps a snapshot's success rate onto pass/warn/fail and an
//! exit code CI can act on.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Verdicts and Exit Codes
// =============================================================================

/// Rate at or above the pass threshold passes with exit 0.
#[test]
fn gate_passes_at_pass_threshold() {
    let temp = Project::with_snapshot(9, 1, 0); // 90%

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}

/// Rate between the thresholds warns but still exits 0.
#[test]
fn gate_warns_between_thresholds() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: warn");
}

/// Rate below the warn threshold fails with exit 1.
#[test]
fn gate_fails_below_warn_threshold() {
    let temp = Project::with_snapshot(1, 1, 0); // 50%

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_exits(cmd, 1).stdout_has("verdict: fail");
}

/// --strict turns a warn verdict into a failing exit code.
#[test]
fn strict_fails_on_warn() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--strict"]).current_dir(temp.path());
    run_exits(cmd, 1).stdout_has("verdict: warn");
}

/// An empty run rates 0% and fails the gate.
#[test]
fn empty_run_fails_gate() {
    let temp = Project::with_snapshot(0, 0, 0);

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_exits(cmd, 1).stdout_has("verdict: fail");
}

/// The rate is printed next to the thresholds it was judged against.
#[test]
fn gate_prints_rate_and_thresholds() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stdout_has("successRate: 75% (pass >= 90, warn >= 70)");
}

// =============================================================================
// Threshold Configuration
// =============================================================================

/// --pass-threshold loosens or tightens the gate.
#[test]
fn pass_threshold_flag_overrides_default() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--pass-threshold", "70"])
        .current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}

/// --warn-threshold widens or narrows the warn band.
#[test]
fn warn_threshold_flag_overrides_default() {
    let temp = Project::with_snapshot(1, 1, 0); // 50%

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--warn-threshold", "40"])
        .current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: warn");
}

/// Thresholds come from proctor.toml when flags are absent.
#[test]
fn thresholds_from_config() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%
    temp.config("[gate]\npass = 60\nwarn = 40\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}

/// CLI flags override config values.
#[test]
fn threshold_flag_overrides_config() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%
    temp.config("[gate]\npass = 60\nwarn = 40\n");

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--pass-threshold", "95"])
        .current_dir(temp.path());
    run_passes(cmd)
        .stdout_has("verdict: warn")
        .stdout_has("(pass >= 95, warn >= 40)");
}

/// Thresholds over 100 are rejected as a usage error.
#[test]
fn out_of_range_threshold_rejected() {
    let temp = Project::with_snapshot(3, 1, 0);

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--pass-threshold", "150"])
        .current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("not a percentage");
}

/// A warn threshold above the pass threshold is rejected.
#[test]
fn inverted_thresholds_rejected() {
    let temp = Project::with_snapshot(3, 1, 0);

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--pass-threshold", "50", "--warn-threshold", "80"])
        .current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("exceeds pass threshold");
}

// =============================================================================
// Input and Output
// =============================================================================

/// --input points the gate at an explicit snapshot.
#[test]
fn gate_reads_input_flag() {
    let temp = Project::empty();
    temp.file("archive/nightly.json", &snapshot(5, 0, 0));

    let mut cmd = proctor_cmd();
    cmd.args(["gate", "--input", "archive/nightly.json"])
        .current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}

/// Missing snapshot is a config error, not a gate failure.
#[test]
fn missing_snapshot_is_config_error() {
    let temp = Project::empty();

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("failed to read results");
}

/// NO_COLOR strips ANSI codes from the verdict line.
#[test]
fn no_color_disables_ansi() {
    let temp = Project::with_snapshot(1, 1, 0);

    let mut cmd = proctor_cmd();
    cmd.arg("gate")
        .env("NO_COLOR", "1")
        .current_dir(temp.path());
    run_exits(cmd, 1).stdout_lacks("\x1b[");
}
