//! HTTP transport to an Ollama-compatible server.
//!
//! Implements the [`ChatTransport`] port with a single reqwest [`Client`].
//! Each operation is one request and one complete response; there is no
//! streaming and no retry here (retry is the use case's decision).

use crate::ollama::error::{OllamaError, Result};
use crate::ollama::protocol::{CHAT_PATH, ChatRequestBody, ChatResponseBody, TAGS_PATH, TagsResponse};
use async_trait::async_trait;
use parley_application::{ChatRequest, ChatTransport, TransportError};
use parley_domain::{Model, excerpt};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Bytes of a failing body kept in log lines
const LOG_EXCERPT_BYTES: usize = 500;

/// Connection-level settings for [`OllamaTransport`]
#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Sent as `Authorization: Bearer <key>` when present
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// [`ChatTransport`] over HTTP/JSON
pub struct OllamaTransport {
    client: Client,
    api_key: Option<String>,
}

impl OllamaTransport {
    pub fn new(settings: TransportSettings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// `GET <endpoint>/api/tags`
    pub async fn fetch_tags(&self, endpoint: &str) -> Result<TagsResponse> {
        let url = format!("{}{}", endpoint, TAGS_PATH);
        debug!("Ollama request: GET {}", url);

        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::read_json(response).await
    }

    /// `POST <endpoint>/api/chat`
    pub async fn post_chat(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponseBody> {
        let url = format!("{}{}", endpoint, CHAT_PATH);
        debug!(
            "Ollama request: POST {} model={} message_count={}",
            url,
            request.model,
            request.messages.len()
        );

        let body = ChatRequestBody::from(request);
        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Check the status, then decode the body as `R`
    async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R> {
        let status = response.status();
        debug!("Ollama response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            let raw = String::from_utf8_lossy(&body).into_owned();
            error!(
                "Ollama error response: status={} body_excerpt={}",
                status,
                excerpt(&raw, LOG_EXCERPT_BYTES)
            );
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            let raw = String::from_utf8_lossy(&body).into_owned();
            error!(
                "Ollama response deserialization failed: {e}. body_excerpt={}",
                excerpt(&raw, LOG_EXCERPT_BYTES)
            );
            OllamaError::ParseError {
                error: e.to_string(),
                raw,
            }
        })
    }
}

#[async_trait]
impl ChatTransport for OllamaTransport {
    async fn list_models(&self, endpoint: &str) -> std::result::Result<Vec<Model>, TransportError> {
        let tags = self.fetch_tags(endpoint).await?;
        Ok(tags.into_models())
    }

    async fn chat(
        &self,
        endpoint: &str,
        request: &ChatRequest,
    ) -> std::result::Result<String, TransportError> {
        let response = self.post_chat(endpoint, request).await?;
        Ok(response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::{Temperature, Turn};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport() -> OllamaTransport {
        OllamaTransport::new(TransportSettings::default()).unwrap()
    }

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            model: Model::new("llama3"),
            messages: vec![Turn::user(text)],
            temperature: Temperature::default(),
        }
    }

    #[tokio::test]
    async fn chat_returns_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({
                "model": "llama3",
                "stream": false,
                "messages": [{"role": "user", "content": "hello"}],
                "options": {"temperature": 0.7}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": {"role": "assistant", "content": "hi there"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = transport().chat(&server.uri(), &request("hello")).await;

        assert_eq!(reply, Ok("hi there".to_string()));
    }

    #[tokio::test]
    async fn chat_non_success_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let err = transport()
            .chat(&server.uri(), &request("hello"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                body: "server error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn chat_missing_content_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
            .mount(&server)
            .await;

        let err = transport()
            .chat(&server.uri(), &request("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Parse { .. }));
    }

    #[tokio::test]
    async fn chat_empty_content_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": {"content": ""}})),
            )
            .mount(&server)
            .await;

        let reply = transport().chat(&server.uri(), &request("hello")).await;

        assert_eq!(reply, Ok(String::new()));
    }

    #[tokio::test]
    async fn list_models_in_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"models": [{"name": "a"}, {"name": "b"}]})),
            )
            .mount(&server)
            .await;

        let models = transport().list_models(&server.uri()).await.unwrap();

        assert_eq!(models, vec![Model::new("a"), Model::new("b")]);
    }

    #[tokio::test]
    async fn list_models_non_success_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(503).set_body_string("loading"))
            .mount(&server)
            .await;

        let err = transport().list_models(&server.uri()).await.unwrap_err();

        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn api_key_is_sent_as_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
            .expect(1)
            .mount(&server)
            .await;

        let transport = OllamaTransport::new(TransportSettings {
            api_key: Some("secret".to_string()),
            ..TransportSettings::default()
        })
        .unwrap();

        assert_eq!(transport.list_models(&server.uri()).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn unreachable_server_is_connection_error() {
        // Port 9 (discard) is closed on test machines
        let err = transport()
            .list_models("http://127.0.0.1:9")
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Connection(_)));
    }
}
