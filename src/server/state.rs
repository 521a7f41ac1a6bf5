//! Application state shared across HTTP handlers

use crate::BuildInfo;
use crate::monitoring::{MetricRegistry, TickStats};
use std::sync::Arc;
use std::time::Instant;

/// State handed to every handler; cheap to clone
#[derive(Clone)]
pub struct AppState {
    /// Gauges read on every scrape
    pub registry: Arc<MetricRegistry>,
    /// Tick counters of the sampling scheduler
    pub tick_stats: Arc<TickStats>,
    pub build_info: BuildInfo,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(registry: Arc<MetricRegistry>, tick_stats: Arc<TickStats>) -> Self {
        Self {
            registry,
            tick_stats,
            build_info: crate::build_info(),
            started_at: Instant::now(),
        }
    }
}
