//! Command line flags

use crate::config::{
    ExporterConfig, default_command_timeout, default_host, default_log_level, default_pod_name,
    default_port, default_stats_interval,
};
use clap::Parser;

/// vmware-vspc Prometheus Exporter
#[derive(Debug, Parser)]
#[command(name = "vmware-vspc-exporter", version, about = "vmware-vspc Prometheus Exporter")]
pub struct Cli {
    /// The address to expose collected metrics from. Default is all interfaces.
    #[arg(long, value_name = "EXPORTER_HOST", default_value_t = default_host())]
    pub host: String,

    /// The port to expose collected metrics from
    #[arg(long, value_name = "EXPORTER_PORT", default_value_t = default_port())]
    pub port: u16,

    /// Seconds to wait before the next collection of metrics
    #[arg(long, value_name = "SECONDS", default_value_t = default_stats_interval())]
    pub stats_interval: u64,

    /// Seconds a command pipeline may run before it is killed; 0 disables the limit
    #[arg(long, value_name = "SECONDS", default_value_t = default_command_timeout())]
    pub command_timeout: u64,

    /// Log level
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Value of the kubernetes_pod_name label. Defaults to the host name.
    #[arg(long, env = "KUBERNETES_POD_NAME")]
    pub pod_name: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> ExporterConfig {
        ExporterConfig {
            host: self.host,
            port: self.port,
            stats_interval: self.stats_interval,
            command_timeout: self.command_timeout,
            log_level: self.log_level,
            pod_name: self.pod_name.unwrap_or_else(default_pod_name),
        }
    }
}
