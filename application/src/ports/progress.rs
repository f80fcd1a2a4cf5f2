//! Progress notification port
//!
//! Defines the interface for reporting progress while a chat call is in flight.

use crate::ports::chat_transport::TransportError;
use parley_domain::Model;

/// Callback for progress updates during a remote call
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ChatProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, model: &Model);

    /// Called once the call finished, after any retries
    fn on_request_complete(&self, model: &Model, success: bool);

    /// Called before a failed attempt is retried
    fn on_retry(&self, _attempt: u32, _error: &TransportError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ChatProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _model: &Model, _success: bool) {}
}
