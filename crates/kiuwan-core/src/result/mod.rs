pub mod interpret;

pub use interpret::{Diagnosis, FailureKind, analysis_code, interpret_failure};
