//! Utility modules for the exporter
//!
//! - **error**: the crate error type and its HTTP mapping
//! - **logging**: subscriber setup

pub mod error;
pub mod logging;

pub use error::{ExporterError, Result};
pub use logging::{LogLevel, init_logging};
