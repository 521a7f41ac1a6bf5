//! Integration tests for vspc-exporter
//!
//! These run real processes and a real HTTP listener on loopback.

pub mod exporter_tests;
pub mod sampling_command_tests;
