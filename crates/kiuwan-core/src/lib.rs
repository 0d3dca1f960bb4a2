pub mod command;
pub mod config;
pub mod error;
pub mod exec;
pub mod report;
pub mod result;
pub mod util;

use std::path::Path;

use tracing::{error, info, info_span, warn};

use crate::command::{build_analysis_command, build_report_command};
use crate::config::InvocationConfig;
use crate::error::{Error, ExecError};
use crate::exec::AgentRunner;
use crate::report::model::{AnalysisRun, DownloadStatus, ReportDownload, RunSummary, ToolInfo};
use crate::result::{FailureKind, analysis_code, interpret_failure};

pub const TOOL_NAME: &str = "kiuwan";

/// JSON schema version of run summaries.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub const SCOPE_BASELINE: &str = "baseline";
pub const SCOPE_COMPLETE_DELIVERY: &str = "completeDelivery";

/// Run the analysis described by `config` and interpret the result.
///
/// A failing agent still yields `Ok`: the verdict and exit code are on the
/// returned summary. `Err` means no verdict could be reached (the agent
/// could not be started, or its log could not be scraped).
///
/// When both report download and wait-for-results are enabled and the agent
/// produced an analysis, a second invocation retrieves its ThreadFix report.
pub fn analyze<R: AgentRunner>(
    config: &InvocationConfig,
    runner: &R,
    tool: ToolInfo,
) -> Result<RunSummary, Error> {
    let _span = info_span!("kiuwan").entered();

    let command = build_analysis_command(config)?;
    info!("Running {command}");

    let analysis = match runner.run(&command) {
        Ok(()) => AnalysisRun::passed(command),
        Err(ExecError::Failed { code, message }) => {
            error!("{message}");
            error!("Check error details at: {}", command.log_path.display());

            let diagnosis = interpret_failure(&message, &command.log_path)?;
            if diagnosis.kind == FailureKind::AuditFail {
                error!("Audit overall result = FAIL");
                for line in &diagnosis.lines {
                    error!("{line}");
                }
            }

            AnalysisRun::failed(command, diagnosis.kind, code, message, diagnosis.lines)
        }
        Err(other) => return Err(other.into()),
    };

    let report = if config.wants_report() && analysis.verdict.has_analysis() {
        download_report(config, runner, &analysis.command.log_path)?
    } else {
        None
    };

    Ok(RunSummary::new(tool, config.clone(), analysis, report))
}

/// Retrieve the report of the analysis announced in `analysis_log`.
///
/// Returns `None` when the log cannot be read or names no analysis code.
fn download_report<R: AgentRunner>(
    config: &InvocationConfig,
    runner: &R,
    analysis_log: &Path,
) -> Result<Option<ReportDownload>, Error> {
    let code = match analysis_code(analysis_log) {
        Ok(Some(code)) => code,
        Ok(None) => {
            warn!(
                "No analysis code found in {}, skipping report download",
                analysis_log.display()
            );
            return Ok(None);
        }
        Err(err) => {
            warn!("{err}, skipping report download");
            return Ok(None);
        }
    };

    let command = build_report_command(config, &code)?;
    info!("Downloading report for analysis {code}: {}", command.command);

    let (status, message) = match runner.run(&command.command) {
        Ok(()) => {
            info!("Report written to {}", command.report_file.display());
            (DownloadStatus::Downloaded, None)
        }
        Err(ExecError::Failed { message, .. }) => {
            error!("Report download failed: {message}");
            error!(
                "Check error details at: {}",
                command.command.log_path.display()
            );
            (DownloadStatus::Failed, Some(message))
        }
        Err(other) => return Err(other.into()),
    };

    Ok(Some(ReportDownload {
        command,
        status,
        message,
    }))
}
