//! Behavioral specs for configuration loading and discovery.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Validation
// =============================================================================

/// Unknown keys are warnings (forward compatibility), never fatal.
#[test]
fn unknown_config_key_warns() {
    let temp = Project::with_snapshot(3, 0, 0);
    temp.config("flavor = \"mint\"\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stderr_has("unrecognized field `flavor`");
}

/// Unknown nested keys are warnings too.
#[test]
fn unknown_nested_config_key_warns() {
    let temp = Project::with_snapshot(3, 0, 0);
    temp.config("[report]\nflavor = \"mint\"\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stderr_has("unrecognized field `flavor`");
}

/// Valid config produces no warnings.
#[test]
fn valid_config_no_warnings() {
    let temp = Project::with_snapshot(3, 0, 0);
    temp.config("[gate]\npass = 90\nwarn = 70\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_passes(cmd).stderr_lacks("warning");
}

/// A config without a version field is rejected.
#[test]
fn config_missing_version_fails() {
    let temp = Project::with_snapshot(3, 0, 0);
    temp.file("proctor.toml", "[gate]\npass = 80\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("missing required field: version");
}

/// A config from a newer schema version is rejected.
#[test]
fn unsupported_config_version_fails() {
    let temp = Project::with_snapshot(3, 0, 0);
    temp.file("proctor.toml", "version = 99\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("unsupported config version 99");
}

/// Wrong-typed values fall back to their defaults.
#[test]
fn wrong_typed_value_uses_default() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%
    temp.config("[gate]\npass = \"ninety\"\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path());
    // Default pass threshold 90 applies, so 75% warns
    run_passes(cmd).stdout_has("verdict: warn");
}

// =============================================================================
// Discovery
// =============================================================================

/// proctor.toml is discovered by walking up from the working directory.
#[test]
fn config_discovered_in_parent() {
    let temp = Project::empty();
    temp.config("[gate]\npass = 60\nwarn = 40\n");
    temp.file("app/results.json", &snapshot(3, 1, 0)); // 75%

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path().join("app"));
    run_passes(cmd).stdout_has("verdict: pass");
}

/// Discovery stops at a .git boundary.
#[test]
fn discovery_stops_at_git_root() {
    let temp = Project::empty();
    temp.config("[gate]\npass = 60\nwarn = 40\n");
    temp.file("app/results.json", &snapshot(3, 1, 0)); // 75%
    std::fs::create_dir_all(temp.path().join("app/.git")).unwrap();

    let mut cmd = proctor_cmd();
    cmd.arg("gate").current_dir(temp.path().join("app"));
    // Parent config is out of reach, so the default 90/70 applies
    run_passes(cmd).stdout_has("verdict: warn");
}

/// -C points at an explicit config file.
#[test]
fn explicit_config_flag() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%
    temp.file("custom.toml", "version = 1\n[gate]\npass = 60\nwarn = 40\n");

    let mut cmd = proctor_cmd();
    cmd.args(["-C", "custom.toml", "gate"])
        .current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}

/// An explicit config path that does not exist is an error.
#[test]
fn explicit_config_missing_fails() {
    let temp = Project::with_snapshot(3, 0, 0);

    let mut cmd = proctor_cmd();
    cmd.args(["-C", "missing.toml", "gate"])
        .current_dir(temp.path());
    run_exits(cmd, 2).stderr_has("config file not found");
}

/// PROCTOR_CONFIG selects the config file like -C does.
#[test]
fn env_config_sets_path() {
    let temp = Project::with_snapshot(3, 1, 0); // 75%
    temp.file("custom.toml", "version = 1\n[gate]\npass = 60\nwarn = 40\n");

    let mut cmd = proctor_cmd();
    cmd.arg("gate")
        .env("PROCTOR_CONFIG", "custom.toml")
        .current_dir(temp.path());
    run_passes(cmd).stdout_has("verdict: pass");
}
