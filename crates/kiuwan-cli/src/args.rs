use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "kiuwan",
    version,
    about = "Run the Kiuwan Local Analyzer and report its audit verdict"
)]
pub struct Args {
    /// Kiuwan Local Analyzer installation directory
    #[arg(long, env = "KIUWAN_LOCAL_ANALYZER_HOME")]
    pub home: String,

    /// Directory to analyze
    #[arg(long, default_value = ".")]
    pub source_path: PathBuf,

    /// Application name in Kiuwan [default: name of the source directory]
    #[arg(long)]
    pub software_name: Option<String>,

    /// Analysis label, usually the version being built
    #[arg(long, default_value = "")]
    pub label: String,

    /// Wait for the analysis to finish and fail on a failed audit
    #[arg(long)]
    pub wait_for_results: bool,

    /// `baseline`, or anything else for a complete delivery
    #[arg(long, default_value = "baseline")]
    pub analysis_scope: String,

    /// Extra agent arguments, whitespace separated, placed before --wait-for-results
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub additional_options: String,

    /// Extra agent arguments, whitespace separated, placed last
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub extra_params: String,

    /// Append a millisecond timestamp to the analysis log file name
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub timestamp_in_log_filename: bool,

    /// Create the application in Kiuwan if missing (baseline only)
    #[arg(long)]
    pub create: bool,

    /// Retrieve the ThreadFix report afterwards (needs --wait-for-results)
    #[arg(long)]
    pub download_report: bool,

    /// Build output directory; logs and reports go to <BUILD_DIR>/kiuwan
    #[arg(long, default_value = "target")]
    pub build_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print the agent command line without running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
