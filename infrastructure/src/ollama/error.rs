//! Error types for the Ollama adapter

use parley_application::TransportError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when communicating with an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status code {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },
}

impl From<OllamaError> for TransportError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Http(e) if e.is_timeout() => TransportError::Timeout,
            OllamaError::Http(e) => TransportError::Connection(e.to_string()),
            OllamaError::Status { status, body } => TransportError::Status { status, body },
            OllamaError::ParseError { error, raw } => TransportError::Parse { error, raw },
        }
    }
}
