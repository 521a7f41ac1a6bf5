//! Pipeline execution on top of `tokio::process`

use super::types::{PipelineStage, StageInput, StageOutput, describe};
use crate::utils::error::{ExporterError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs command pipelines and returns the final stage's output as text
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `stages` in order and return the last stage's stdout,
    /// trailing whitespace trimmed.
    async fn run(&self, stages: &[PipelineStage]) -> Result<String>;

    /// Run a single command
    async fn run_single(&self, stage: &PipelineStage) -> Result<String> {
        self.run(std::slice::from_ref(stage)).await
    }
}

/// Executor spawning real OS processes
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every pipeline run. Stages still running when it expires are killed.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run all stages and keep every stage's captured output.
    pub async fn execute(&self, stages: &[PipelineStage]) -> Result<Vec<StageOutput>> {
        if stages.is_empty() {
            return Err(ExporterError::config("Pipeline has no stages"));
        }

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, execute_stages(stages))
                .await
                .map_err(|_| ExporterError::command_timeout(describe(stages), limit))?,
            None => execute_stages(stages).await,
        }
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, stages: &[PipelineStage]) -> Result<String> {
        let outputs = self.execute(stages).await?;
        Ok(outputs
            .last()
            .map(StageOutput::stdout_text)
            .unwrap_or_default())
    }
}

async fn execute_stages(stages: &[PipelineStage]) -> Result<Vec<StageOutput>> {
    let mut outputs: Vec<StageOutput> = Vec::with_capacity(stages.len());

    for stage in stages {
        let input = match stage.input {
            StageInput::Previous => outputs.last().map(|previous| previous.stdout.as_slice()),
            StageInput::None => None,
        };
        let output = run_stage(stage, input).await?;
        outputs.push(output);
    }

    Ok(outputs)
}

async fn run_stage(stage: &PipelineStage, input: Option<&[u8]>) -> Result<StageOutput> {
    let mut command = Command::new(&stage.program);
    command
        .args(&stage.args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command
        .spawn()
        .map_err(|e| ExporterError::command_launch(&stage.program, e))?;
    let pid = child.id();
    debug!(program = %stage.program, args = ?stage.args, pid = ?pid, "Started exec");

    let stdin = child.stdin.take();
    let feed = async move {
        if let (Some(mut pipe), Some(data)) = (stdin, input) {
            pipe.write_all(data).await?;
            pipe.shutdown().await?;
        }
        Ok::<(), std::io::Error>(())
    };

    let (fed, output) = tokio::join!(feed, child.wait_with_output());
    let output = output.map_err(|e| ExporterError::command_io(&stage.program, e))?;

    match fed {
        Ok(()) => {}
        // the program exited without draining its input
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!(program = %stage.program, pid = ?pid, "Stage closed stdin early");
        }
        Err(e) => return Err(ExporterError::command_io(&stage.program, e)),
    }

    let output = StageOutput {
        program: stage.program.clone(),
        exit_code: output.status.code(),
        stdout: output.stdout,
        stderr: output.stderr,
    };

    if output.success() {
        debug!(
            program = %stage.program,
            pid = ?pid,
            result = %output.stdout_text(),
            "Done exec"
        );
    } else {
        warn!(
            program = %stage.program,
            args = ?stage.args,
            pid = ?pid,
            exit_code = ?output.exit_code,
            stdout = %output.stdout_text(),
            stderr = %output.stderr_text(),
            "Stage exited unsuccessfully, passing its stdout on"
        );
    }

    Ok(output)
}
