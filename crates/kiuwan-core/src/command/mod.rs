pub mod build;
pub mod model;
pub mod paths;
pub mod platform;

pub use build::{build_analysis_command, build_report_command};
pub use model::{CommandLine, ReportCommand};
pub use platform::Platform;
