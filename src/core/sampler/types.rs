//! Sample type

use crate::monitoring::definitions::{ACTIVE_CONNECTIONS, WAITING_BYTES_IN_RECEIVE_QUEUE};

/// Statistics gathered by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sample {
    /// Bytes sitting in receive queues of non-idle sockets
    pub waiting_bytes: u64,
    /// Rows in the TCP connection table
    pub active_connections: u64,
}

impl Sample {
    /// Metric name and value pairs, in registration order
    pub fn entries(&self) -> [(&'static str, u64); 2] {
        [
            (WAITING_BYTES_IN_RECEIVE_QUEUE, self.waiting_bytes),
            (ACTIVE_CONNECTIONS, self.active_connections),
        ]
    }
}
