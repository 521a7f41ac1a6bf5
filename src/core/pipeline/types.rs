//! Pipeline data types

use std::fmt;

/// Where a stage reads its standard input from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageInput {
    /// stdin is `/dev/null`
    None,
    /// stdin is the captured stdout of the preceding stage
    #[default]
    Previous,
}

/// One external program invocation inside a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStage {
    pub program: String,
    pub args: Vec<String>,
    pub input: StageInput,
}

impl PipelineStage {
    /// Stage fed from the previous stage's stdout
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            input: StageInput::Previous,
        }
    }

    /// Set the input source
    pub fn with_input(mut self, input: StageInput) -> Self {
        self.input = input;
        self
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What one stage produced
#[derive(Debug, Clone, Default)]
pub struct StageOutput {
    pub program: String,
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl StageOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// stdout as text with trailing whitespace removed
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim_end().to_string()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }
}

/// Render a pipeline the way a shell would show it
pub(crate) fn describe(stages: &[PipelineStage]) -> String {
    stages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}
