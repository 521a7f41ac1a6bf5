//! Configuration validation

use super::models::ExporterConfig;
use crate::utils::logging::LogLevel;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ExporterConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating exporter configuration");

        if self.host.trim().is_empty() {
            return Err("Exporter host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Exporter port must be greater than 0".to_string());
        }

        if self.stats_interval == 0 {
            return Err("Stats interval must be at least 1 second".to_string());
        }

        if self.pod_name.is_empty() {
            return Err("Pod name label cannot be empty".to_string());
        }

        self.log_level
            .parse::<LogLevel>()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
