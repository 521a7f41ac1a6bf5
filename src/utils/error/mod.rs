//! Error handling for the exporter
//!
//! This module defines the error type used throughout the exporter.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{ExporterError, Result};
