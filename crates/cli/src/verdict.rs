// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/warn/fail policy for a run's success rate.
//!
//! Maps the integer success rate onto a verdict using two percentage
//! thresholds. Setting both thresholds to the same value disables the
//! warn band.

use serde::{Deserialize, Serialize};

/// Success rate at or above which a run passes outright.
pub const DEFAULT_PASS_THRESHOLD: u8 = 90;

/// Success rate at or above which a run warns instead of failing.
pub const DEFAULT_WARN_THRESHOLD: u8 = 70;

/// Overall judgement of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Fail => "fail",
        }
    }
}

/// Percentage thresholds that bucket a success rate into a [`Verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub pass: u8,
    pub warn: u8,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        VerdictThresholds {
            pass: DEFAULT_PASS_THRESHOLD,
            warn: DEFAULT_WARN_THRESHOLD,
        }
    }
}

impl VerdictThresholds {
    /// Validates that both thresholds are percentages and that the warn
    /// threshold does not exceed the pass threshold.
    pub fn new(pass: u8, warn: u8) -> Result<Self, ThresholdError> {
        if pass > 100 {
            return Err(ThresholdError::OutOfRange { value: pass });
        }
        if warn > 100 {
            return Err(ThresholdError::OutOfRange { value: warn });
        }
        if warn > pass {
            return Err(ThresholdError::Inverted { pass, warn });
        }
        Ok(VerdictThresholds { pass, warn })
    }

    pub fn verdict(&self, success_rate: u8) -> Verdict {
        if success_rate >= self.pass {
            Verdict::Pass
        } else if success_rate >= self.warn {
            Verdict::Warn
        } else {
            Verdict::Fail
        }
    }
}

/// Errors raised by threshold validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    #[error("threshold {value} is not a percentage (expected 0-100)")]
    OutOfRange { value: u8 },

    #[error("warn threshold {warn} exceeds pass threshold {pass}")]
    Inverted { pass: u8, warn: u8 },
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
