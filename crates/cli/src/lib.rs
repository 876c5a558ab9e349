pub mod analysis;
pub mod cli;
pub mod collector;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod outcome;
pub mod report;
pub mod results;
pub mod suite;
pub mod verdict;

pub use analysis::{Analysis, EnhancedReport, ErrorCategory, ErrorPattern, SuiteHighlight};
pub use cli::{Cli, Command, GateArgs, OutputFormat, ReportArgs};
pub use collector::{CollectorError, ResultCollector};
pub use config::{Config, ConfigError};
pub use error::{Error, ExitCode, Result};
pub use outcome::{TestOutcome, TestStatus};
pub use results::{ResultSet, ResultsError, RunSummary};
pub use suite::TestSuite;
pub use verdict::{Verdict, VerdictThresholds};
