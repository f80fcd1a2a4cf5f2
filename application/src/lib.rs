//! Application layer for parley
//!
//! This crate contains the chat session use case, the port definitions it
//! talks through, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, RetryPolicy};
pub use ports::{
    chat_transport::{ChatRequest, ChatTransport, TransportError},
    progress::{ChatProgressNotifier, NoProgress},
};
pub use use_cases::chat_session::ChatSessionUseCase;
