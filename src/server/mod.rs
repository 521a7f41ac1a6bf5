//! HTTP exposition of the gauges
//!
//! Serves `GET /metrics` in the Prometheus text format and a small JSON
//! `GET /health` document.

pub mod routes;
mod server;
pub mod state;

pub use server::ExpositionServer;
pub use state::AppState;
