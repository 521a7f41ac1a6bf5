//! MetricRegistry implementation

use super::definitions::{MetricDefinition, standard_definitions};
use crate::core::sampler::Sample;
use crate::utils::error::{ExporterError, Result};
use prometheus::core::Collector;
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A registered gauge and whether it has been written yet
struct RegisteredGauge {
    vec: IntGaugeVec,
    published: AtomicBool,
}

/// Process-wide set of gauges
///
/// Built once at startup and shared through `Arc` between the scheduler,
/// which writes, and the HTTP handlers, which read. Each gauge is an atomic
/// integer so a scrape never sees a torn value.
pub struct MetricRegistry {
    registry: Registry,
    definitions: Vec<MetricDefinition>,
    gauges: HashMap<&'static str, RegisteredGauge>,
}

impl MetricRegistry {
    /// Register every definition in a fresh, private prometheus registry
    pub fn new(definitions: Vec<MetricDefinition>) -> Result<Self> {
        let registry = Registry::new();
        let mut gauges = HashMap::with_capacity(definitions.len());

        for definition in &definitions {
            let opts = Opts::new(definition.name, definition.help)
                .const_labels(definition.const_labels.clone().into_iter().collect());
            let gauge = IntGaugeVec::new(opts, &[])?;
            registry.register(Box::new(gauge.clone()))?;
            gauges.insert(
                definition.name,
                RegisteredGauge {
                    vec: gauge,
                    published: AtomicBool::new(false),
                },
            );
            debug!(metric = definition.name, "Registered gauge");
        }

        Ok(Self {
            registry,
            definitions,
            gauges,
        })
    }

    /// Registry holding the two exporter gauges
    pub fn with_pod_name(pod_name: &str) -> Result<Self> {
        Self::new(standard_definitions(pod_name))
    }

    /// Registered definitions in registration order
    pub fn all(&self) -> &[MetricDefinition] {
        &self.definitions
    }

    /// Set the current value of gauge `name`
    ///
    /// An unknown name, or labels the definition does not declare, is a
    /// wiring mistake and yields [`ExporterError::MetricNotFound`].
    pub fn set(&self, name: &str, labels: &HashMap<&str, &str>, value: u64) -> Result<()> {
        let registered = self.registered(name)?;
        let gauge = child(name, &registered.vec, labels)?;
        gauge.set(i64::try_from(value).unwrap_or(i64::MAX));
        registered.published.store(true, Ordering::Release);
        Ok(())
    }

    /// Current value of gauge `name`, `None` until it has been set once
    ///
    /// Reading never creates the gauge, so an unset gauge stays out of the
    /// exposition.
    pub fn get(&self, name: &str, labels: &HashMap<&str, &str>) -> Result<Option<i64>> {
        let registered = self.registered(name)?;
        check_labels(name, &registered.vec, labels)?;
        if !registered.published.load(Ordering::Acquire) {
            return Ok(None);
        }
        Ok(Some(child(name, &registered.vec, labels)?.get()))
    }

    /// Write every value of `sample`
    pub fn apply(&self, sample: &Sample) -> Result<()> {
        let labels = HashMap::new();
        for (name, value) in sample.entries() {
            self.set(name, &labels, value)?;
        }
        Ok(())
    }

    /// Snapshot of all metric families
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Text exposition format of the current values
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ExporterError::server(format!("Exposition is not UTF-8: {}", e)))
    }

    /// Content type matching [`render`](Self::render)
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    fn registered(&self, name: &str) -> Result<&RegisteredGauge> {
        self.gauges
            .get(name)
            .ok_or_else(|| ExporterError::metric_not_found(name))
    }
}

/// Labels must name exactly the variable labels the gauge declares
fn check_labels(name: &str, vec: &IntGaugeVec, labels: &HashMap<&str, &str>) -> Result<()> {
    let descs = vec.desc();
    let declared = descs
        .first()
        .map(|desc| desc.variable_labels.as_slice())
        .unwrap_or_default();
    let matches = labels.len() == declared.len()
        && declared.iter().all(|label| labels.contains_key(label.as_str()));
    if matches {
        Ok(())
    } else {
        Err(ExporterError::metric_not_found(format!(
            "{} {:?}: expected labels {:?}",
            name, labels, declared
        )))
    }
}

fn child(name: &str, vec: &IntGaugeVec, labels: &HashMap<&str, &str>) -> Result<IntGauge> {
    vec.get_metric_with(labels)
        .map_err(|e| ExporterError::metric_not_found(format!("{} {:?}: {}", name, labels, e)))
}
