//! Logging setup
//!
//! Installs the global `tracing` subscriber from the `--log-level` flag.

use crate::utils::error::{ExporterError, Result};
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Targets that only produce noise at the exporter's default verbosity.
const QUIET_TARGETS: &[&str] = &["actix_server", "actix_web", "mio"];

/// Log verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ExporterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" | "CRITICAL" => Ok(LogLevel::Error),
            _ => Err(ExporterError::config(format!("Unknown log level: {}", s.trim()))),
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Build the filter directive string for `level`.
pub fn filter_directives(level: LogLevel) -> String {
    let level = Level::from(level).to_string().to_lowercase();
    let mut directives = vec![level];
    directives.extend(QUIET_TARGETS.iter().map(|target| format!("{}=error", target)));
    directives.join(",")
}

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(level)))
        .map_err(|e| ExporterError::config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| ExporterError::config(format!("Logging already initialized: {}", e)))
}
