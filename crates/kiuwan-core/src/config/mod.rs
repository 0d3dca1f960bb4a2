pub mod model;

pub use model::{AnalysisScope, InvocationConfig};
