//! # vspc-exporter
//!
//! Prometheus exporter for vmware-vspc compute pods. Every `--stats-interval`
//! seconds it samples host TCP state through a couple of diagnostic
//! commands and publishes the results as two gauges:
//!
//! - `openstack_compute_vspc_waiting_bytes_in_receive_queue`
//! - `openstack_compute_vspc_active_connections`
//!
//! ## Running
//!
//! ```rust,no_run
//! use vspc_exporter::{ExporterApp, ExporterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = ExporterApp::new(ExporterConfig::default())?;
//!     app.run_until_shutdown().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod utils;

pub use app::ExporterApp;
pub use config::ExporterConfig;
pub use crate::core::pipeline::{CommandExecutor, PipelineStage, ProcessExecutor, StageInput};
pub use crate::core::sampler::{Sample, StatSampler, StatSource};
pub use monitoring::{MetricDefinition, MetricRegistry, SamplingScheduler, SchedulerState};
pub use utils::error::{ExporterError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Exporter build information, stamped by `build.rs`
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Unix time of the build
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information of this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert_eq!(info.version, VERSION);
        assert!(!info.git_hash.is_empty());
        assert!(!info.build_time.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(NAME, "vspc-exporter");
        assert_eq!(DESCRIPTION, env!("CARGO_PKG_DESCRIPTION"));
    }
}
