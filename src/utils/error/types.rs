//! Error types for the exporter

use std::time::Duration;
use thiserror::Error;

/// Result type alias for the exporter
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExporterError {
    /// An external program could not be started
    #[error("Failed to launch '{program}': {source}")]
    CommandLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A started program could not be driven to completion
    #[error("I/O error while running '{program}': {source}")]
    CommandIo {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A pipeline did not finish within the configured bound
    #[error("Command '{program}' timed out after {timeout:?}")]
    CommandTimeout { program: String, timeout: Duration },

    /// Captured output was not the expected integer
    #[error("Cannot parse {metric} from command output {output:?}")]
    StatParse { metric: String, output: String },

    /// Reference to a metric that was never registered
    #[error("Metric not found: {0}")]
    MetricNotFound(String),

    /// The metrics HTTP endpoint could not bind
    #[error("Cannot serve metrics on {address}: {source}")]
    ExpositionStartup {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Prometheus client errors
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Start/stop called in the wrong state
    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    /// HTTP server errors after startup
    #[error("Server error: {0}")]
    Server(String),
}
