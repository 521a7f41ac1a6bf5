//! Exporter lifecycle
//!
//! Wires the registry, sampler, scheduler and HTTP server together. Start
//! order is server then scheduler; stop order is the reverse, and `stop`
//! only returns once both have fully terminated.

use crate::config::{ExporterConfig, Validate};
use crate::core::pipeline::ProcessExecutor;
use crate::core::sampler::{StatSampler, StatSource};
use crate::monitoring::{MetricRegistry, SamplingScheduler, SchedulerState, TickStats};
use crate::server::{AppState, ExpositionServer};
use crate::utils::error::{ExporterError, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// The running exporter
pub struct ExporterApp {
    config: ExporterConfig,
    registry: Arc<MetricRegistry>,
    scheduler: SamplingScheduler,
    server: ExpositionServer,
}

impl ExporterApp {
    /// Exporter sampling the host through real commands
    pub fn new(config: ExporterConfig) -> Result<Self> {
        let executor = ProcessExecutor::new().with_timeout(config.command_timeout());
        let sampler = StatSampler::new(Arc::new(executor));
        Self::with_source(config, Arc::new(sampler))
    }

    /// Exporter taking its samples from `source`
    pub fn with_source(config: ExporterConfig, source: Arc<dyn StatSource>) -> Result<Self> {
        config.validate().map_err(ExporterError::Config)?;

        let registry = Arc::new(MetricRegistry::with_pod_name(&config.pod_name)?);
        let scheduler =
            SamplingScheduler::new(source, Arc::clone(&registry), config.stats_interval());
        let state = AppState::new(Arc::clone(&registry), scheduler.stats());
        let server = ExpositionServer::new(config.address(), state);

        Ok(Self {
            config,
            registry,
            scheduler,
            server,
        })
    }

    pub fn config(&self) -> &ExporterConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<MetricRegistry> {
        &self.registry
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn tick_stats(&self) -> Arc<TickStats> {
        self.scheduler.stats()
    }

    pub fn local_addrs(&self) -> Vec<SocketAddr> {
        self.server.local_addrs()
    }

    /// Bind the HTTP endpoint, then start sampling
    pub fn start(&mut self) -> Result<()> {
        info!("Starting vspc exporter");
        self.server.start()?;

        if let Err(e) = self.scheduler.start() {
            warn!("Scheduler failed to start: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Stop sampling, wait for the tick task, then release the HTTP endpoint
    pub async fn stop(&mut self) -> Result<()> {
        info!("Stopping vspc exporter");
        let scheduler = self.scheduler.stop().await;
        let server = self.server.stop().await;
        scheduler.and(server)
    }

    /// Run until SIGINT or SIGTERM, then shut down cleanly
    pub async fn run_until_shutdown(mut self) -> Result<()> {
        self.start()?;
        shutdown_signal().await;
        info!("Shutdown signal received");
        self.stop().await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
