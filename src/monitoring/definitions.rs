//! The gauges this exporter publishes
//!
//! Metric names are part of the scrape contract and must not change.

use std::collections::BTreeMap;

/// Bytes waiting in TCP receive queues
pub const WAITING_BYTES_IN_RECEIVE_QUEUE: &str =
    "openstack_compute_vspc_waiting_bytes_in_receive_queue";

/// TCP connections known to the kernel
pub const ACTIVE_CONNECTIONS: &str = "openstack_compute_vspc_active_connections";

/// Constant label identifying the pod on every gauge
pub const POD_NAME_LABEL: &str = "kubernetes_pod_name";

/// Static description of one gauge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub help: &'static str,
    pub const_labels: BTreeMap<String, String>,
}

impl MetricDefinition {
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            const_labels: BTreeMap::new(),
        }
    }

    pub fn with_const_label<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.const_labels.insert(key.into(), value.into());
        self
    }
}

/// Both exporter gauges, labelled with `pod_name`
pub fn standard_definitions(pod_name: &str) -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            WAITING_BYTES_IN_RECEIVE_QUEUE,
            "The number of bytes waiting in the receive queue",
        )
        .with_const_label(POD_NAME_LABEL, pod_name),
        MetricDefinition::new(
            ACTIVE_CONNECTIONS,
            "The number of active connections in Pod",
        )
        .with_const_label(POD_NAME_LABEL, pod_name),
    ]
}
