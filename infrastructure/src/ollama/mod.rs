//! Adapter for Ollama-compatible chat servers.
//!
//! - [`protocol`]: JSON bodies of `/api/tags` and `/api/chat`
//! - [`transport`]: [`OllamaTransport`](transport::OllamaTransport), the
//!   reqwest implementation of the `ChatTransport` port
//! - [`error`]: adapter errors and their mapping onto `TransportError`

pub mod error;
pub mod protocol;
pub mod transport;
