use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::command::{CommandLine, ReportCommand};
use crate::config::InvocationConfig;
use crate::result::FailureKind;

/// Outcome of one runner invocation.
///
/// Serialized as the tool's JSON output. Verdict and exit code reflect the
/// analysis run only; the report download is recorded alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub config: InvocationConfig,
    pub analysis: AnalysisRun,
    pub report: Option<ReportDownload>,
}

impl RunSummary {
    pub fn new(
        tool: ToolInfo,
        config: InvocationConfig,
        analysis: AnalysisRun,
        report: Option<ReportDownload>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            config,
            analysis,
            report,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.analysis.exit_code
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// The analysis invocation and what came of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRun {
    pub command: CommandLine,
    pub verdict: Verdict,
    pub exit_code: i32,
    /// Failure message from the runner, absent on success.
    pub message: Option<String>,
    /// Lines scraped from the log on an audit failure.
    pub diagnostics: Vec<String>,
}

impl AnalysisRun {
    pub fn passed(command: CommandLine) -> Self {
        Self {
            command,
            verdict: Verdict::Pass,
            exit_code: 0,
            message: None,
            diagnostics: vec![],
        }
    }

    /// `code` is `None` when the agent died without an exit value; the run
    /// then reports exit code 1.
    pub fn failed(
        command: CommandLine,
        kind: FailureKind,
        code: Option<i32>,
        message: String,
        diagnostics: Vec<String>,
    ) -> Self {
        let verdict = match kind {
            FailureKind::AuditFail => Verdict::AuditFail,
            FailureKind::Generic => Verdict::Fail,
        };
        Self {
            command,
            verdict,
            exit_code: code.unwrap_or(1),
            message: Some(message),
            diagnostics,
        }
    }
}

/// Build-step verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    /// Agent exit code 10: the audit did not pass.
    AuditFail,
    Fail,
}

impl Verdict {
    /// Whether an analysis with this verdict exists on the server and can
    /// have its report retrieved.
    pub fn has_analysis(&self) -> bool {
        matches!(self, Verdict::Pass | Verdict::AuditFail)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Pass => "PASS",
            Verdict::AuditFail => "AUDIT_FAIL",
            Verdict::Fail => "FAIL",
        };
        f.write_str(s)
    }
}

/// The report retrieval, when one was attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDownload {
    pub command: ReportCommand,
    pub status: DownloadStatus,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    Downloaded,
    Failed,
}
