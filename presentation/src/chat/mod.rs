//! Interactive chat module
//!
//! Provides a line-editor based interactive chat interface over a chat session.

mod input;
mod prompt;
mod repl;

pub use input::{ReplInput, parse_input};
pub use repl::{ChatRepl, Step};
