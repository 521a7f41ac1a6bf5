//! External command pipelines
//!
//! A pipeline is an ordered list of [`PipelineStage`]s run as separate
//! processes, each stage reading the captured stdout of the one before it.
//!
//! ## Failure policy
//!
//! A stage that exits non-zero does not abort the pipeline. Its stdout is
//! still handed to the next stage and the event is logged with the exit
//! code, stdout and stderr, the same way `a | b | c` behaves in a shell.
//! Only a stage that cannot be started at all fails the run
//! ([`ExporterError::CommandLaunch`](crate::utils::error::ExporterError)).

mod executor;
mod types;

pub use executor::{CommandExecutor, ProcessExecutor};
pub use types::{PipelineStage, StageInput, StageOutput};
