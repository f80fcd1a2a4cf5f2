//! Chat transport port
//!
//! Defines the interface for reaching a remote chat-completion server.

use async_trait::async_trait;
use parley_domain::{Model, Temperature, Turn};
use thiserror::Error;

/// Errors that can occur while talking to the remote server.
///
/// Every variant is recoverable: the caller reports it and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to parse response: {error}")]
    Parse { error: String, raw: String },
}

impl TransportError {
    /// Whether a retry has a chance of succeeding
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Connection(_) | TransportError::Timeout)
    }

    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Everything the server needs to produce the next assistant turn
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: Model,
    /// The full transcript, oldest turn first
    pub messages: Vec<Turn>,
    pub temperature: Temperature,
}

/// Transport to a chat-completion server
///
/// This port defines how the application layer reaches the remote service.
/// Implementations (adapters) live in the infrastructure layer; tests stub it.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// List the models served at `endpoint`, in the order the server reports them
    async fn list_models(&self, endpoint: &str) -> Result<Vec<Model>, TransportError>;

    /// Send a chat request and return the reply content, which may be empty
    async fn chat(&self, endpoint: &str, request: &ChatRequest) -> Result<String, TransportError>;
}
