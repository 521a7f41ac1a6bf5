//! Test suite for vspc-exporter
//!
//! ## Test Categories
//!
//! ### 1. Common Utilities (`common/`)
//! Stub command executors, port helpers and a tiny HTTP getter.
//!
//! ### 2. Integration Tests (`integration/`)
//! - The real sampling commands run against canned `ss` / `/proc/net/tcp` text
//! - The exporter lifecycle end to end, scraped over HTTP
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! cargo test --test lib
//! ```

pub mod common;
pub mod integration;
