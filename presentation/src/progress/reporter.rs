//! Progress reporting for chat requests

use indicatif::{ProgressBar, ProgressStyle};
use parley_application::{ChatProgressNotifier, TransportError};
use parley_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a "Thinking..." spinner while the server works on a reply
pub struct ThinkingSpinner {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProgressNotifier for ThinkingSpinner {
    fn on_request_start(&self, model: &Model) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(model.to_string());
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _model: &Model, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }

    fn on_retry(&self, attempt: u32, error: &TransportError) {
        if let Ok(slot) = self.spinner.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!("Retrying (attempt {}) after: {}", attempt + 1, error));
            }
        }
    }
}
