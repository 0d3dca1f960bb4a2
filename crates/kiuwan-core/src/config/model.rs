use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{SCOPE_BASELINE, SCOPE_COMPLETE_DELIVERY};

/// Parameters for one analyzer invocation.
///
/// Populated once per build step by whatever drives the run (the CLI in this
/// workspace) and consumed read-only by the command builder. Values are
/// stored as supplied; trimming happens where they are turned into arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InvocationConfig {
    /// Kiuwan Local Analyzer installation directory.
    pub home: String,
    pub source_path: String,
    pub software_name: String,
    /// Analysis label; omitted from the command line when empty.
    pub label: String,
    pub wait_for_results: bool,
    /// Free text, see [`AnalysisScope::parse`].
    pub analysis_scope: String,
    /// Whitespace-separated arguments placed before `--wait-for-results`.
    pub additional_options: String,
    /// Whitespace-separated arguments placed last.
    pub extra_params: String,
    pub timestamp_in_log_filename: bool,
    /// Ask the agent to create the application. Only honoured for baselines.
    pub create: bool,
    pub download_report: bool,
    /// Build output directory; logs and reports go under `<build_dir>/kiuwan`.
    pub build_dir: PathBuf,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self {
            home: String::new(),
            source_path: ".".to_string(),
            software_name: String::new(),
            label: String::new(),
            wait_for_results: false,
            analysis_scope: SCOPE_BASELINE.to_string(),
            additional_options: String::new(),
            extra_params: String::new(),
            timestamp_in_log_filename: true,
            create: false,
            download_report: false,
            build_dir: PathBuf::from("target"),
        }
    }
}

impl InvocationConfig {
    pub fn scope(&self) -> AnalysisScope {
        AnalysisScope::parse(&self.analysis_scope)
    }

    /// The report is only retrievable once the agent has waited for results.
    pub fn wants_report(&self) -> bool {
        self.download_report && self.wait_for_results
    }
}

/// Analysis mode understood by the agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisScope {
    Baseline,
    CompleteDelivery,
}

impl AnalysisScope {
    /// `"baseline"` in any case, surrounded by any whitespace, is a baseline.
    /// Everything else, including the empty string, is a complete delivery.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(SCOPE_BASELINE) {
            AnalysisScope::Baseline
        } else {
            AnalysisScope::CompleteDelivery
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisScope::Baseline => SCOPE_BASELINE,
            AnalysisScope::CompleteDelivery => SCOPE_COMPLETE_DELIVERY,
        }
    }
}

impl std::fmt::Display for AnalysisScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
