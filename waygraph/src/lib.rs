//! waygraph — shortest and longest path reports for scenario files.

pub mod config;
pub mod prompt;
pub mod report;

pub use config::{DEFAULT_SCENARIO, RunConfig};
pub use prompt::prompt_scenario;
pub use report::Report;
