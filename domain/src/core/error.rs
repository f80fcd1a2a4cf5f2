//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("Temperature must be within [0, 1], got {0}")]
    InvalidTemperature(f64),
}
