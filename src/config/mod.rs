//! Configuration management for the exporter
//!
//! The exporter has no configuration file: everything comes from CLI flags
//! (see [`crate::cli`]) and lands in [`ExporterConfig`].

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;
