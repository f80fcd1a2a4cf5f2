//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the spinner while a reply is pending
    pub show_progress: bool,
    /// Where line history is kept; `None` keeps it in memory only
    pub history_path: Option<PathBuf>,
    /// Ask which model to use before the first prompt
    pub choose_model_on_start: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_path: None,
            choose_model_on_start: true,
        }
    }
}
