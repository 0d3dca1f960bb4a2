//! Best-effort scraping of the agent log after a failed run.
//!
//! The agent has no structured output. A failed run is recognised from the
//! exit code embedded in the failure message, and the interesting bits of
//! the log are found by substring match and a fixed token offset. If the
//! agent changes its log layout, the extracted text degrades silently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InterpretError;
use crate::util::tokens::skip_tokens;

/// Exit code the agent uses for "audit overall result = FAIL".
pub const AUDIT_FAIL_CODE: i64 = 10;

pub const ANALYSIS_CREATED_MARKER: &str = "Analysis created in Kiuwan with code";
pub const RESULTS_URL_MARKER: &str = "Analysis results URL";

/// Leading tokens (timestamp, level, ...) dropped from a diagnostic line.
const DIAGNOSTIC_SKIP_TOKENS: usize = 4;

/// Why a run failed, as far as the log tells us.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// The agent completed and the audit did not pass.
    AuditFail,
    /// Any other failure; nothing is scraped.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub kind: FailureKind,
    /// Lines worth relaying to the user, in log order.
    pub lines: Vec<String>,
}

/// True when any whitespace-delimited token of `message` is the integer 10.
pub fn is_audit_failure(message: &str) -> bool {
    message
        .split_whitespace()
        .any(|token| token.parse::<i64>() == Ok(AUDIT_FAIL_CODE))
}

/// Classify a failure from its message and, for audit failures, pull the
/// analysis code and results URL lines out of the log.
///
/// The log is only read for audit failures.
pub fn interpret_failure(message: &str, log_path: &Path) -> Result<Diagnosis, InterpretError> {
    if !is_audit_failure(message) {
        return Ok(Diagnosis {
            kind: FailureKind::Generic,
            lines: Vec::new(),
        });
    }

    let log = read_log(log_path)?;
    let lines = extract_diagnostics(&log).map_err(|(line_no, line)| {
        InterpretError::MalformedLine {
            path: log_path.to_path_buf(),
            line_no,
            line,
        }
    })?;

    Ok(Diagnosis {
        kind: FailureKind::AuditFail,
        lines,
    })
}

/// Every line mentioning the analysis code or the results URL, minus its
/// first four tokens.
///
/// On a matching line that is too short, returns its 1-based number and text.
pub fn extract_diagnostics(log: &str) -> Result<Vec<String>, (usize, String)> {
    log.lines()
        .enumerate()
        .filter(|(_, line)| {
            line.contains(ANALYSIS_CREATED_MARKER) || line.contains(RESULTS_URL_MARKER)
        })
        .map(|(idx, line)| {
            skip_tokens(line, DIAGNOSTIC_SKIP_TOKENS)
                .map(str::to_string)
                .ok_or_else(|| (idx + 1, line.to_string()))
        })
        .collect()
}

/// The code of the analysis created by the run, if the log announces one.
///
/// Takes the first token after the marker phrase, ignoring a separating `:`.
pub fn analysis_code(log_path: &Path) -> Result<Option<String>, InterpretError> {
    let log = read_log(log_path)?;
    Ok(find_analysis_code(&log))
}

pub fn find_analysis_code(log: &str) -> Option<String> {
    log.lines()
        .filter_map(|line| line.split_once(ANALYSIS_CREATED_MARKER))
        .find_map(|(_, rest)| {
            rest.trim_start()
                .trim_start_matches(':')
                .split_whitespace()
                .next()
                .map(str::to_string)
        })
}

fn read_log(path: &Path) -> Result<String, InterpretError> {
    let bytes = std::fs::read(path).map_err(|source| InterpretError::ReadLog {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
