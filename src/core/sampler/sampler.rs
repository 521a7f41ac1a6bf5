//! StatSampler implementation

use super::commands::{active_connections_command, waiting_bytes_pipeline};
use super::types::Sample;
use crate::core::pipeline::CommandExecutor;
use crate::monitoring::definitions::{ACTIVE_CONNECTIONS, WAITING_BYTES_IN_RECEIVE_QUEUE};
use crate::utils::error::{ExporterError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Anything able to produce a [`Sample`] for one tick
#[async_trait]
pub trait StatSource: Send + Sync {
    async fn sample(&self) -> Result<Sample>;
}

/// Samples TCP statistics by running external commands
#[derive(Clone)]
pub struct StatSampler {
    executor: Arc<dyn CommandExecutor>,
}

impl StatSampler {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Total bytes queued for reading on sockets that are not idle and established
    pub async fn waiting_bytes(&self) -> Result<u64> {
        let output = self.executor.run(&waiting_bytes_pipeline()).await?;
        parse_count(WAITING_BYTES_IN_RECEIVE_QUEUE, &output)
    }

    /// Number of TCP connections
    pub async fn active_connections(&self) -> Result<u64> {
        let output = self
            .executor
            .run_single(&active_connections_command())
            .await?;
        parse_count(ACTIVE_CONNECTIONS, &output)
    }
}

#[async_trait]
impl StatSource for StatSampler {
    async fn sample(&self) -> Result<Sample> {
        // one after the other; there is nothing to gain from overlapping them
        let waiting_bytes = self.waiting_bytes().await?;
        let active_connections = self.active_connections().await?;

        let sample = Sample {
            waiting_bytes,
            active_connections,
        };
        debug!(?sample, "Fetched stats");
        Ok(sample)
    }
}

/// Parse a non-negative integer printed by a command. Blank output counts as 0.
pub fn parse_count(metric: &str, output: &str) -> Result<u64> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ExporterError::stat_parse(metric, output))
}
