//! Output locations under `<build_dir>/kiuwan`.
//!
//! Every function here creates the output directory before returning a path
//! inside it. The files themselves are written by the agent.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::Error;

pub const OUTPUT_DIR: &str = "kiuwan";

const ANALYZE_LOG_STEM: &str = "analyze";

/// `yyyyMMddHHmmssSSS`: 17 digits, millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// Create `<build_dir>/kiuwan` (recursively, idempotently) and return it as
/// an absolute path.
pub fn output_dir(build_dir: &Path) -> Result<PathBuf, Error> {
    let dir = build_dir.join(OUTPUT_DIR);
    let wrap = |source| Error::OutputDir {
        path: dir.clone(),
        source,
    };

    std::fs::create_dir_all(&dir).map_err(wrap)?;
    let dir = std::path::absolute(&dir).map_err(wrap)?;

    debug!(dir = %dir.display(), "output directory ready");
    Ok(dir)
}

/// Log file for the analysis run: `analyze.log`, or `analyze-<timestamp>.log`
/// when a timestamp is given.
pub fn analyze_log_path(
    build_dir: &Path,
    timestamp: Option<NaiveDateTime>,
) -> Result<PathBuf, Error> {
    let name = match timestamp {
        Some(ts) => format!("{ANALYZE_LOG_STEM}-{}.log", ts.format(TIMESTAMP_FORMAT)),
        None => format!("{ANALYZE_LOG_STEM}.log"),
    };
    Ok(output_dir(build_dir)?.join(name))
}

/// Log file for the report download of `analysis_code`.
pub fn download_log_path(build_dir: &Path, analysis_code: &str) -> Result<PathBuf, Error> {
    Ok(output_dir(build_dir)?.join(format!("download-{analysis_code}.log")))
}

/// ThreadFix report file for `analysis_code`.
pub fn report_file_path(build_dir: &Path, analysis_code: &str) -> Result<PathBuf, Error> {
    Ok(output_dir(build_dir)?.join(format!("report-threadfix-{analysis_code}.threadfix")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at(ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_milli_opt(9, 5, 2, ms)
            .unwrap()
    }

    #[test]
    fn plain_log_name_without_timestamp() {
        let build = tempdir().unwrap();
        let path = analyze_log_path(build.path(), None).unwrap();

        assert_eq!(path.file_name().unwrap(), "analyze.log");
        assert!(path.parent().unwrap().is_dir());
        assert!(path.is_absolute());
    }

    #[test]
    fn timestamp_is_seventeen_digits_with_millis() {
        let build = tempdir().unwrap();
        let path = analyze_log_path(build.path(), Some(at(7))).unwrap();

        assert_eq!(path.file_name().unwrap(), "analyze-20240307090502007.log");
    }

    #[test]
    fn output_dir_is_created_recursively_and_idempotently() {
        let build = tempdir().unwrap();
        let nested = build.path().join("a").join("b");

        let first = output_dir(&nested).unwrap();
        let second = output_dir(&nested).unwrap();

        assert_eq!(first, second);
        assert!(first.ends_with("a/b/kiuwan"));
        assert!(first.is_dir());
    }

    #[test]
    fn report_paths_are_keyed_by_analysis_code() {
        let build = tempdir().unwrap();

        let report = report_file_path(build.path(), "A-1").unwrap();
        let log = download_log_path(build.path(), "A-1").unwrap();

        assert_eq!(report.file_name().unwrap(), "report-threadfix-A-1.threadfix");
        assert_eq!(log.file_name().unwrap(), "download-A-1.log");
        assert_eq!(report.parent(), log.parent());
    }

    #[test]
    fn output_dir_fails_when_build_dir_is_a_file() {
        let build = tempdir().unwrap();
        let file = build.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let err = output_dir(&file).unwrap_err();
        assert!(matches!(err, Error::OutputDir { .. }));
    }
}
