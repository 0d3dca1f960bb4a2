//! Error types for building, running and interpreting an analyzer run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level failure of a runner invocation.
///
/// A non-zero exit of the agent is *not* an `Error`: it is a verdict carried
/// by the run summary. This type covers the cases where no verdict could be
/// produced at all.
#[derive(Debug, Error)]
pub enum Error {
    /// The `<build_dir>/kiuwan` directory could not be created or resolved.
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Interpret(#[from] InterpretError),
}

/// Failure reported by an [`AgentRunner`](crate::exec::AgentRunner).
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to execute {executable}: {source}")]
    Spawn {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The agent ran and exited unsuccessfully.
    ///
    /// `message` embeds the exit code as free text; the result interpreter
    /// works from this message, not from `code`.
    #[error("{message}")]
    Failed { code: Option<i32>, message: String },
}

impl ExecError {
    /// Failure for an agent that exited with `code`.
    pub fn exit_code(code: i32) -> Self {
        ExecError::Failed {
            code: Some(code),
            message: format!("Process exited with an error: {code} (Exit value: {code})"),
        }
    }

    /// Failure for an agent that was terminated without an exit code.
    pub fn terminated() -> Self {
        ExecError::Failed {
            code: None,
            message: "Process terminated without an exit value".to_string(),
        }
    }
}

/// Failure while scraping the agent log.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("failed to read log file {path}: {source}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log line {line_no} in {path} is too short to hold a diagnostic: {line:?}")]
    MalformedLine {
        path: PathBuf,
        line_no: usize,
        line: String,
    },
}
