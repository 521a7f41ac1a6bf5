//! TCP statistics sampling
//!
//! Produces one [`Sample`] per tick from two fixed command invocations.

mod commands;
mod sampler;
mod types;

pub use commands::{ESTABLISHED_IDLE_PATTERN, active_connections_command, waiting_bytes_pipeline};
pub use sampler::{StatSampler, StatSource, parse_count};
pub use types::Sample;
