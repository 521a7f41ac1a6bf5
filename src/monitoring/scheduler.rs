//! Recurring sampling loop
//!
//! State machine: `Idle -> Running -> Stopping -> Idle`. While running, one
//! background task repeats { sample, publish, sleep } until it is told to
//! stop. A failing tick is logged and the loop carries on.

use super::registry::MetricRegistry;
use crate::core::sampler::{Sample, StatSource};
use crate::utils::error::{ExporterError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Lifecycle state of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopping,
}

/// Tick outcome counters
#[derive(Debug, Default)]
pub struct TickStats {
    succeeded: AtomicU64,
    failed: AtomicU64,
    consecutive_failures: AtomicU64,
}

impl TickStats {
    pub fn succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Acquire)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Acquire)
    }

    pub fn consecutive_failures(&self) -> u64 {
        self.consecutive_failures.load(Ordering::Acquire)
    }

    fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::AcqRel);
        self.consecutive_failures.store(0, Ordering::Release);
    }

    /// Returns the length of the current failure streak
    fn record_failure(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::AcqRel);
        self.consecutive_failures.fetch_add(1, Ordering::AcqRel) + 1
    }
}

struct TickTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Owns the background tick task
pub struct SamplingScheduler {
    source: Arc<dyn StatSource>,
    registry: Arc<MetricRegistry>,
    interval: Duration,
    stats: Arc<TickStats>,
    state: SchedulerState,
    task: Option<TickTask>,
}

impl SamplingScheduler {
    pub fn new(
        source: Arc<dyn StatSource>,
        registry: Arc<MetricRegistry>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            registry,
            interval,
            stats: Arc::new(TickStats::default()),
            state: SchedulerState::Idle,
            task: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Counters shared with the running task
    pub fn stats(&self) -> Arc<TickStats> {
        Arc::clone(&self.stats)
    }

    /// Spawn the tick loop. Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<()> {
        if self.task.is_some() {
            return Err(ExporterError::lifecycle("Sampling scheduler is already running"));
        }

        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(tick_loop(
            Arc::clone(&self.source),
            Arc::clone(&self.registry),
            self.interval,
            Arc::clone(&self.stats),
            shutdown_rx,
        ));

        self.task = Some(TickTask { shutdown, handle });
        self.state = SchedulerState::Running;
        info!(interval = ?self.interval, "Sampling scheduler started");
        Ok(())
    }

    /// Cancel the tick loop and wait until the task has finished.
    ///
    /// A tick interrupted mid-command drops its child processes, which kills
    /// them. Calling this while idle does nothing.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };

        self.state = SchedulerState::Stopping;
        info!("Stopping sampling scheduler");

        // the receiver only goes away once the task has ended
        let _ = task.shutdown.send(true);
        let joined = task.handle.await;
        self.state = SchedulerState::Idle;

        match joined {
            Ok(()) => {
                info!("Sampling scheduler stopped");
                Ok(())
            }
            Err(e) if e.is_cancelled() => Ok(()),
            Err(e) => Err(ExporterError::lifecycle(format!(
                "Sampling task ended abnormally: {}",
                e
            ))),
        }
    }
}

impl Drop for SamplingScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            warn!("Sampling scheduler dropped while running, aborting task");
            task.handle.abort();
        }
    }
}

/// One tick: sample then publish. The registry is touched only on success.
pub(crate) async fn run_tick(source: &dyn StatSource, registry: &MetricRegistry) -> Result<Sample> {
    let sample = source.sample().await?;
    registry.apply(&sample)?;
    Ok(sample)
}

async fn tick_loop(
    source: Arc<dyn StatSource>,
    registry: Arc<MetricRegistry>,
    interval: Duration,
    stats: Arc<TickStats>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            outcome = run_tick(source.as_ref(), &registry) => match outcome {
                Ok(sample) => {
                    stats.record_success();
                    debug!(?sample, "Updated metrics");
                }
                Err(e) if e.is_tick_recoverable() => {
                    let streak = stats.record_failure();
                    error!(failed_ticks_in_a_row = streak, "Error fetching stats: {}", e);
                }
                Err(e) => {
                    stats.record_failure();
                    error!("Metric update rejected, registry and sampler disagree: {}", e);
                    debug_assert!(
                        !matches!(e, ExporterError::MetricNotFound(_)),
                        "sample names a gauge the registry does not hold: {}",
                        e
                    );
                }
            },
        }

        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    debug!("Tick loop exited");
}
