//! Conversation session domain.
//!
//! - [`entities::Session`]: the aggregate holding endpoint, model and transcript
//! - [`entities::Turn`]: a single utterance within a transcript
//! - [`temperature::Temperature`]: validated sampling temperature
//! - [`reply::AssistantReply`]: outcome of a successful chat call

pub mod entities;
pub mod reply;
pub mod temperature;
