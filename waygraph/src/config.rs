//! Run configuration shared by the binary and the report builder.

use waygraph_paths::Limits;

/// Filename used when the interactive prompt gets an empty answer.
pub const DEFAULT_SCENARIO: &str = "a2-sample.txt";

/// What to run for one scenario.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Expansion budget applied to every search.
    pub max_expanded: Option<usize>,
    /// Whether to run the (exponential) longest-path search.
    pub longest_path: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_expanded: None,
            longest_path: true,
        }
    }
}

impl RunConfig {
    /// Search limits derived from this configuration.
    pub fn limits(&self) -> Limits {
        match self.max_expanded {
            Some(max) => Limits::none().max_expanded(max),
            None => Limits::none(),
        }
    }
}
