//! Gauge registry and the recurring sampling loop

pub mod definitions;
mod registry;
mod scheduler;

pub use definitions::{MetricDefinition, standard_definitions};
pub use registry::MetricRegistry;
pub use scheduler::{SamplingScheduler, SchedulerState, TickStats};
