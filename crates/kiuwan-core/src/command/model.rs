use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A fully assembled agent invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandLine {
    pub executable: PathBuf,
    /// Order is part of the agent contract and must not be changed.
    pub args: Vec<String>,
    /// File receiving the agent's stdout and stderr.
    pub log_path: PathBuf,
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Invocation retrieving the ThreadFix report of a finished analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCommand {
    pub command: CommandLine,
    pub analysis_code: String,
    /// Where the agent is told to write the report.
    pub report_file: PathBuf,
}
