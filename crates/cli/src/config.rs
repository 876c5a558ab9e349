//! Configuration parsing and validation.
//!
//! Handles proctor.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verdict::{
    DEFAULT_PASS_THRESHOLD, DEFAULT_WARN_THRESHOLD, ThresholdError, VerdictThresholds,
};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    report: Option<toml::Value>,

    #[serde(default)]
    gate: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,

    /// Gate threshold configuration.
    #[serde(default)]
    pub gate: GateConfig,
}

/// Report rendering configuration.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Results snapshot consumed by `report` and `gate` (default: results.json).
    #[serde(default = "ReportConfig::default_input")]
    pub input: PathBuf,

    /// Title rendered into HTML and text reports.
    #[serde(default = "ReportConfig::default_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            title: Self::default_title(),
        }
    }
}

impl ReportConfig {
    fn default_input() -> PathBuf {
        PathBuf::from("results.json")
    }

    fn default_title() -> String {
        crate::report::DEFAULT_TITLE.to_string()
    }
}

/// Gate threshold configuration.
#[derive(Debug, Deserialize)]
pub struct GateConfig {
    /// Success rate at or above which the gate passes (default: 90).
    #[serde(default = "GateConfig::default_pass")]
    pub pass: u8,

    /// Success rate at or above which the gate warns (default: 70).
    #[serde(default = "GateConfig::default_warn")]
    pub warn: u8,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            pass: Self::default_pass(),
            warn: Self::default_warn(),
        }
    }
}

impl GateConfig {
    fn default_pass() -> u8 {
        DEFAULT_PASS_THRESHOLD
    }

    fn default_warn() -> u8 {
        DEFAULT_WARN_THRESHOLD
    }

    /// Validated thresholds for the gate verdict.
    pub fn thresholds(&self) -> Result<VerdictThresholds, ThresholdError> {
        VerdictThresholds::new(self.pass, self.warn)
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "report", "gate"];

/// Known report keys in the config.
const KNOWN_REPORT_KEYS: &[&str] = &["input", "title"];

/// Known gate keys in the config.
const KNOWN_GATE_KEYS: &[&str] = &["pass", "warn"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let version = version_check.version.ok_or_else(|| ConfigError::Parse {
        path: path.to_path_buf(),
        message: "missing required field: version".to_string(),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            found: version,
            supported: SUPPORTED_VERSION,
        });
    }

    // Parse full config
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config, ConfigError> {
    // First validate version
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let version = flexible.version.ok_or_else(|| ConfigError::Parse {
        path: path.to_path_buf(),
        message: "missing required field: version".to_string(),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            found: version,
            supported: SUPPORTED_VERSION,
        });
    }

    // Collect unknown top-level keys
    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }

    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    // Rebuild known sections, falling back to defaults on missing or
    // wrong-typed values
    let report = match flexible.report {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_REPORT_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("report.{}", key));
                }
            }

            let input = t
                .get("input")
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .unwrap_or_else(ReportConfig::default_input);

            let title = t
                .get("title")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(ReportConfig::default_title);

            ReportConfig { input, title }
        }
        _ => ReportConfig::default(),
    };

    let gate = match flexible.gate {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_GATE_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("gate.{}", key));
                }
            }

            let pass = t
                .get("pass")
                .and_then(|v| v.as_integer())
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or_else(GateConfig::default_pass);

            let warn = t
                .get("warn")
                .and_then(|v| v.as_integer())
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or_else(GateConfig::default_warn);

            GateConfig { pass, warn }
        }
        _ => GateConfig::default(),
    };

    Ok(Config {
        version,
        report,
        gate,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "proctor: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Errors raised while loading or parsing proctor.toml.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path}: unsupported config version {found} (supported: {supported})")]
    Version {
        path: PathBuf,
        found: i64,
        supported: i64,
    },

    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
