// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finalized result snapshots and their file I/O.
//!
//! The snapshot is the wire format between test execution and report
//! generation. Field names are camelCase and stable; dashboards grep the
//! summary counters by name.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::suite::TestSuite;

/// Current snapshot schema version.
pub const RESULTS_VERSION: u32 = 1;

/// Aggregate counts and timing for one test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,

    /// Integer percentage in `[0, 100]`; 0 when no tests ran.
    pub success_rate: u8,

    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl RunSummary {
    /// `round(passed / total * 100)`, defined as 0 when `total` is 0.
    pub fn rate(passed: usize, total: usize) -> u8 {
        if total == 0 {
            0
        } else {
            ((passed as f64 / total as f64) * 100.0).round() as u8
        }
    }
}

/// The finalized, immutable aggregate of one test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Snapshot schema version. Files written before versioning load as 1.
    #[serde(default = "default_version")]
    pub version: u32,

    pub summary: RunSummary,

    /// Closed suites in execution order.
    pub suites: Vec<TestSuite>,
}

fn default_version() -> u32 {
    RESULTS_VERSION
}

impl ResultSet {
    /// Load a snapshot from a file.
    ///
    /// A missing, unreadable, or malformed file is an error; reports are
    /// never generated from partial input.
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let content = std::fs::read_to_string(path).map_err(|e| ResultsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let results: ResultSet =
            serde_json::from_str(&content).map_err(|e| ResultsError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if results.version > RESULTS_VERSION {
            return Err(ResultsError::Version {
                found: results.version,
                supported: RESULTS_VERSION,
            });
        }

        Ok(results)
    }

    /// Save the snapshot, creating parent directories if needed.
    ///
    /// Written through a temporary sibling file and renamed into place, so
    /// a failed save never leaves a partial snapshot behind.
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let content = serde_json::to_string_pretty(self).map_err(ResultsError::Serialize)?;
        write_atomic(path, &content).map_err(|e| ResultsError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Write `content` to `path` via a temp file in the destination directory.
///
/// Used for snapshots and rendered report artifacts alike; readers never
/// observe a half-written file.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Errors from snapshot load/store operations.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error("failed to read results from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse results in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("results version {found} is newer than supported {supported}")]
    Version { found: u32, supported: u32 },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write results to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
