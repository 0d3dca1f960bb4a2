//! Argument assembly for the two agent operations.
//!
//! The argument order produced here is the agent's command-line contract.
//! Tests pin it down; do not reorder.

use chrono::{Local, NaiveDateTime};

use crate::command::model::{CommandLine, ReportCommand};
use crate::command::paths;
use crate::command::platform::Platform;
use crate::config::{AnalysisScope, InvocationConfig};
use crate::error::Error;
use crate::util::tokens::split_options;

/// Build the analysis invocation for the host platform, stamping the log
/// file with the current local time when configured to.
pub fn build_analysis_command(config: &InvocationConfig) -> Result<CommandLine, Error> {
    build_analysis_command_at(config, Platform::host(), Local::now().naive_local())
}

/// Same as [`build_analysis_command`] with the platform and clock supplied.
pub fn build_analysis_command_at(
    config: &InvocationConfig,
    platform: Platform,
    now: NaiveDateTime,
) -> Result<CommandLine, Error> {
    let scope = config.scope();
    let mut args = Vec::new();

    args.push("--softwareName".to_string());
    args.push(config.software_name.trim().to_string());

    if config.create && scope == AnalysisScope::Baseline {
        args.push("--create".to_string());
    }

    args.push("--sourcePath".to_string());
    args.push(config.source_path.trim().to_string());

    // Emptiness is checked before trimming: a blank label is still passed.
    if !config.label.is_empty() {
        args.push("--label".to_string());
        args.push(config.label.trim().to_string());
    }

    args.push("--analysis-scope".to_string());
    args.push(scope.as_str().to_string());
    if scope == AnalysisScope::CompleteDelivery {
        args.push("--change-request-status".to_string());
        args.push("inprogress".to_string());
    }

    args.extend(split_options(&config.additional_options));

    if config.wait_for_results {
        args.push("--wait-for-results".to_string());
    }

    args.extend(split_options(&config.extra_params));

    let timestamp = config.timestamp_in_log_filename.then_some(now);
    let log_path = paths::analyze_log_path(&config.build_dir, timestamp)?;

    Ok(CommandLine {
        executable: platform.executable(&config.home),
        args,
        log_path,
    })
}

/// Build the ThreadFix report retrieval for a finished analysis.
pub fn build_report_command(
    config: &InvocationConfig,
    analysis_code: &str,
) -> Result<ReportCommand, Error> {
    build_report_command_for(config, Platform::host(), analysis_code)
}

pub fn build_report_command_for(
    config: &InvocationConfig,
    platform: Platform,
    analysis_code: &str,
) -> Result<ReportCommand, Error> {
    let report_file = paths::report_file_path(&config.build_dir, analysis_code)?;
    let log_path = paths::download_log_path(&config.build_dir, analysis_code)?;

    let args = vec![
        "--softwareName".to_string(),
        config.software_name.trim().to_string(),
        "--retrieve-data".to_string(),
        "--analysis-code".to_string(),
        analysis_code.to_string(),
        "--format".to_string(),
        "threadfix".to_string(),
        "--output-file".to_string(),
        report_file.display().to_string(),
    ];

    Ok(ReportCommand {
        command: CommandLine {
            executable: platform.executable(&config.home),
            args,
            log_path,
        },
        analysis_code: analysis_code.to_string(),
        report_file,
    })
}
