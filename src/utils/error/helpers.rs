//! Helper functions for creating specific error types

use super::types::ExporterError;
use std::time::Duration;

/// Helper functions for creating specific errors
impl ExporterError {
    pub fn command_launch<S: Into<String>>(program: S, source: std::io::Error) -> Self {
        Self::CommandLaunch {
            program: program.into(),
            source,
        }
    }

    pub fn command_io<S: Into<String>>(program: S, source: std::io::Error) -> Self {
        Self::CommandIo {
            program: program.into(),
            source,
        }
    }

    pub fn command_timeout<S: Into<String>>(program: S, timeout: Duration) -> Self {
        Self::CommandTimeout {
            program: program.into(),
            timeout,
        }
    }

    pub fn stat_parse<M: Into<String>, O: Into<String>>(metric: M, output: O) -> Self {
        Self::StatParse {
            metric: metric.into(),
            output: output.into(),
        }
    }

    pub fn metric_not_found<S: Into<String>>(name: S) -> Self {
        Self::MetricNotFound(name.into())
    }

    pub fn exposition_startup<S: Into<String>>(address: S, source: std::io::Error) -> Self {
        Self::ExpositionStartup {
            address: address.into(),
            source,
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn lifecycle<S: Into<String>>(message: S) -> Self {
        Self::Lifecycle(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether the sampling loop may log this error and carry on with the next tick.
    ///
    /// Command and parse failures are environmental. Everything else means the
    /// exporter itself is wired wrong.
    pub fn is_tick_recoverable(&self) -> bool {
        matches!(
            self,
            Self::CommandLaunch { .. }
                | Self::CommandIo { .. }
                | Self::CommandTimeout { .. }
                | Self::StatParse { .. }
        )
    }
}
