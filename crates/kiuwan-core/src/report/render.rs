use crate::TOOL_NAME;
use crate::report::model::{DownloadStatus, RunSummary};

pub fn render_text(summary: &RunSummary) -> String {
    let analysis = &summary.analysis;

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, summary.tool.version));
    out.push_str(&format!("Command: {}\n", analysis.command));
    out.push_str(&format!("Log: {}\n", analysis.command.log_path.display()));
    out.push_str(&format!(
        "Verdict: {} (exit code {})\n",
        analysis.verdict, analysis.exit_code
    ));
    for line in &analysis.diagnostics {
        out.push_str(&format!("  - {line}\n"));
    }
    if let Some(report) = &summary.report {
        match report.status {
            DownloadStatus::Downloaded => out.push_str(&format!(
                "Report: {}\n",
                report.command.report_file.display()
            )),
            DownloadStatus::Failed => out.push_str(&format!(
                "Report: download failed, see {}\n",
                report.command.command.log_path.display()
            )),
        }
    }
    out
}

pub fn render_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandLine, ReportCommand};
    use crate::config::InvocationConfig;
    use crate::report::model::{AnalysisRun, ReportDownload, ToolInfo};
    use crate::result::FailureKind;
    use std::path::PathBuf;

    fn summary(report: Option<ReportDownload>) -> RunSummary {
        let command = CommandLine {
            executable: PathBuf::from("/kla/bin/agent.sh"),
            args: vec!["--softwareName".into(), "app".into()],
            log_path: PathBuf::from("/build/kiuwan/analyze.log"),
        };
        RunSummary::new(
            ToolInfo {
                name: "kiuwan-cli".into(),
                version: "0.1.0".into(),
            },
            InvocationConfig::default(),
            AnalysisRun::failed(
                command,
                FailureKind::AuditFail,
                Some(10),
                "Process exited with an error: 10 (Exit value: 10)".into(),
                vec!["created in Kiuwan with code: A-1".into()],
            ),
            report,
        )
    }

    fn download(status: DownloadStatus) -> ReportDownload {
        ReportDownload {
            command: ReportCommand {
                command: CommandLine {
                    executable: PathBuf::from("/kla/bin/agent.sh"),
                    args: vec![],
                    log_path: PathBuf::from("/build/kiuwan/download-A-1.log"),
                },
                analysis_code: "A-1".into(),
                report_file: PathBuf::from("/build/kiuwan/report-threadfix-A-1.threadfix"),
            },
            status,
            message: None,
        }
    }

    #[test]
    fn text_lists_verdict_and_diagnostics() {
        let text = render_text(&summary(None));

        assert!(text.starts_with("kiuwan 0.1.0\n"));
        assert!(text.contains("Command: /kla/bin/agent.sh --softwareName app\n"));
        assert!(text.contains("Verdict: AUDIT_FAIL (exit code 10)\n"));
        assert!(text.contains("  - created in Kiuwan with code: A-1\n"));
        assert!(!text.contains("Report:"));
    }

    #[test]
    fn text_mentions_report_outcome() {
        let ok = render_text(&summary(Some(download(DownloadStatus::Downloaded))));
        assert!(ok.contains("Report: /build/kiuwan/report-threadfix-A-1.threadfix"));

        let failed = render_text(&summary(Some(download(DownloadStatus::Failed))));
        assert!(failed.contains("download failed, see /build/kiuwan/download-A-1.log"));
    }

    #[test]
    fn json_has_stable_top_level_keys() {
        let json = render_json(&summary(None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in ["schema_version", "tool", "config", "analysis", "report"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["analysis"]["verdict"], "AUDIT_FAIL");
        assert_eq!(value["analysis"]["exit_code"], 10);
        assert!(value["report"].is_null());
    }
}
