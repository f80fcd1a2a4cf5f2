//! Session domain entities

use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::session::temperature::Temperature;
use serde::{Deserialize, Serialize};

/// Speaker of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One utterance in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A conversation with a remote chat-completion server (Aggregate Root)
///
/// The transcript keeps insertion order and is never reordered or
/// deduplicated. Alternation of roles is expected but not enforced: a failed
/// call leaves a user turn without an answer, and the next user turn is
/// simply appended after it.
#[derive(Debug, Clone)]
pub struct Session {
    endpoint: String,
    model: Model,
    temperature: Temperature,
    transcript: Vec<Turn>,
}

impl Session {
    /// Create an empty session against `endpoint`.
    ///
    /// A trailing `/` on the endpoint is dropped so routes can be appended.
    pub fn new(endpoint: impl Into<String>, model: Model) -> Result<Self, DomainError> {
        let endpoint = endpoint.into().trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(DomainError::EmptyEndpoint);
        }
        Ok(Self {
            endpoint,
            model,
            temperature: Temperature::default(),
            transcript: Vec::new(),
        })
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    /// Overwrite the active model. No check against what the server serves.
    pub fn select_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.temperature = temperature;
    }

    pub fn add_user_turn(&mut self, content: impl Into<String>) {
        self.transcript.push(Turn::user(content));
    }

    pub fn add_assistant_turn(&mut self, content: impl Into<String>) {
        self.transcript.push(Turn::assistant(content));
    }

    /// Drop every turn. Endpoint, model and temperature are kept.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new("http://localhost:11434", Model::default()).unwrap()
    }

    #[test]
    fn test_endpoint_is_normalized() {
        let s = Session::new(" http://host:11434/ ", Model::default()).unwrap();
        assert_eq!(s.endpoint(), "http://host:11434");
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        assert_eq!(
            Session::new("  ", Model::default()).unwrap_err(),
            DomainError::EmptyEndpoint
        );
    }

    #[test]
    fn test_turns_keep_insertion_order() {
        let mut s = session();
        s.add_user_turn("one");
        s.add_user_turn("one");
        s.add_assistant_turn("two");

        let roles: Vec<Role> = s.transcript().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
        assert_eq!(s.turn_count(), 3);
        assert_eq!(s.transcript()[0], s.transcript()[1]);
    }

    #[test]
    fn test_reset_keeps_model_and_endpoint() {
        let mut s = session();
        s.select_model(Model::new("llama3"));
        s.add_user_turn("hello");
        s.reset();
        assert!(s.transcript().is_empty());
        assert_eq!(s.model().as_str(), "llama3");
        assert_eq!(s.endpoint(), "http://localhost:11434");

        s.reset();
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Turn::assistant("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "hi"}));
    }
}
