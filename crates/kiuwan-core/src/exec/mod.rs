pub mod runner;

pub use runner::{AgentRunner, ProcessRunner};
