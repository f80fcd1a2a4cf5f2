//! Wire types for the Ollama HTTP API.
//!
//! Only the fields this client reads are declared. Required fields have no
//! serde default, so a reply that lacks them fails to parse instead of
//! turning into an empty string.

use parley_application::ChatRequest;
use parley_domain::{Model, Turn};
use serde::{Deserialize, Serialize};

pub const TAGS_PATH: &str = "/api/tags";
pub const CHAT_PATH: &str = "/api/chat";

// ─── Request Structures ───────────────────────────────────────────────────────

/// Body of `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatRequestBody<'a> {
    pub model: &'a str,
    pub messages: &'a [Turn],
    /// Always false: the client waits for one complete reply
    pub stream: bool,
    pub options: ChatOptions,
}

#[derive(Debug, Serialize)]
pub struct ChatOptions {
    pub temperature: f64,
}

impl<'a> From<&'a ChatRequest> for ChatRequestBody<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: &request.messages,
            stream: false,
            options: ChatOptions {
                temperature: request.temperature.value(),
            },
        }
    }
}

// ─── Response Structures ──────────────────────────────────────────────────────

/// Body of a successful `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatResponseBody {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

/// Body of a successful `GET /api/tags`
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    /// Absent on servers with nothing installed
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
pub struct ModelTag {
    pub name: String,
}

impl TagsResponse {
    pub fn into_models(self) -> Vec<Model> {
        self.models.into_iter().map(|tag| Model::new(tag.name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::Temperature;
    use serde_json::json;

    #[test]
    fn test_chat_body_shape() {
        let request = ChatRequest {
            model: Model::new("llama3"),
            messages: vec![Turn::user("hello"), Turn::assistant("hi")],
            temperature: Temperature::new(0.5).unwrap(),
        };

        let body = serde_json::to_value(ChatRequestBody::from(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "llama3",
                "messages": [
                    {"role": "user", "content": "hello"},
                    {"role": "assistant", "content": "hi"}
                ],
                "stream": false,
                "options": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_chat_response_requires_content() {
        let ok: ChatResponseBody =
            serde_json::from_value(json!({"message": {"role": "assistant", "content": "hi there"}}))
                .unwrap();
        assert_eq!(ok.message.content, "hi there");

        assert!(serde_json::from_value::<ChatResponseBody>(json!({"message": {}})).is_err());
        assert!(serde_json::from_value::<ChatResponseBody>(json!({"done": true})).is_err());
    }

    #[test]
    fn test_tags_keep_server_order() {
        let tags: TagsResponse = serde_json::from_value(json!({
            "models": [{"name": "b", "size": 1}, {"name": "a", "size": 2}]
        }))
        .unwrap();
        assert_eq!(tags.into_models(), vec![Model::new("b"), Model::new("a")]);
    }

    #[test]
    fn test_tags_without_models_key_is_empty() {
        let tags: TagsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(tags.into_models().is_empty());
    }

    #[test]
    fn test_tag_without_name_fails() {
        assert!(serde_json::from_value::<TagsResponse>(json!({"models": [{"size": 3}]})).is_err());
    }
}
