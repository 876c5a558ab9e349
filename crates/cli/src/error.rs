use std::path::PathBuf;

use crate::collector::CollectorError;
use crate::config::ConfigError;
use crate::results::ResultsError;
use crate::verdict::ThresholdError;

/// Proctor error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Gate thresholds outside their legal range
    #[error("threshold error: {0}")]
    Threshold(#[from] ThresholdError),

    /// Results file missing, malformed, or unwritable
    #[error(transparent)]
    Results(#[from] ResultsError),

    /// Collector protocol misuse
    #[error(transparent)]
    Collector(#[from] CollectorError),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using proctor Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Gate verdict was failing
    GateFailed = 1,
    /// Configuration, argument, or results data error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(_) | Error::Argument(_) | Error::Threshold(_) => ExitCode::ConfigError,
            Error::Results(_) => ExitCode::ConfigError,
            Error::Collector(_) => ExitCode::InternalError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
