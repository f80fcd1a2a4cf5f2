//! Domain layer for parley
//!
//! This crate contains the conversation model: the [`Session`] aggregate,
//! its [`Turn`]s, and the value objects they are built from.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one utterance in a conversation, tagged with its speaker [`Role`]
//! - **Transcript**: the ordered history of turns sent on every request
//! - **Model**: an opaque identifier naming a model served by the remote endpoint

pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, text::excerpt};
pub use session::{
    entities::{Role, Session, Turn},
    reply::AssistantReply,
    temperature::Temperature,
};
