//! Configuration data models

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bind address (all interfaces)
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default exposition port
pub fn default_port() -> u16 {
    5050
}

/// Default seconds between two sampling ticks
pub fn default_stats_interval() -> u64 {
    60
}

/// Default bound on one command pipeline, in seconds
pub fn default_command_timeout() -> u64 {
    30
}

/// Default log level
pub fn default_log_level() -> String {
    "INFO".to_string()
}

/// Pod name used as the constant metric label, taken from the host name
pub fn default_pod_name() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string())
}

/// Exporter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Address the metrics endpoint binds to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the metrics endpoint binds to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds to wait between sampling ticks
    #[serde(default = "default_stats_interval")]
    pub stats_interval: u64,
    /// Upper bound for one command pipeline in seconds; 0 disables it
    #[serde(default = "default_command_timeout")]
    pub command_timeout: u64,
    /// Log level name
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Value of the `kubernetes_pod_name` label on every gauge
    #[serde(default = "default_pod_name")]
    pub pod_name: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            stats_interval: default_stats_interval(),
            command_timeout: default_command_timeout(),
            log_level: default_log_level(),
            pod_name: default_pod_name(),
        }
    }
}

impl ExporterConfig {
    /// Get the bind address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sleep between two ticks
    pub fn stats_interval(&self) -> Duration {
        Duration::from_secs(self.stats_interval)
    }

    /// Per-pipeline timeout, `None` when disabled
    pub fn command_timeout(&self) -> Option<Duration> {
        (self.command_timeout > 0).then(|| Duration::from_secs(self.command_timeout))
    }
}
