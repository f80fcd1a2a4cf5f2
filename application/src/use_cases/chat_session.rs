//! Chat session use case
//!
//! Drives one [`Session`] against a [`ChatTransport`]: model discovery,
//! model switching, sending turns and resetting the transcript.

use crate::config::BehaviorConfig;
use crate::ports::chat_transport::{ChatRequest, ChatTransport, TransportError};
use crate::ports::progress::{ChatProgressNotifier, NoProgress};
use parley_domain::{AssistantReply, Model, Session, Temperature, Turn};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Use case for holding a conversation with a remote chat server
///
/// The session lives behind an async mutex that `send_message` holds for
/// the whole remote call, so concurrent sends on one use case are
/// serialized and the transcript keeps the order in which calls started.
pub struct ChatSessionUseCase<T: ChatTransport + 'static> {
    transport: Arc<T>,
    behavior: BehaviorConfig,
    session: Mutex<Session>,
}

impl<T: ChatTransport + 'static> ChatSessionUseCase<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        Self {
            transport,
            behavior: BehaviorConfig::default(),
            session: Mutex::new(session),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub async fn endpoint(&self) -> String {
        self.session.lock().await.endpoint().to_string()
    }

    pub async fn active_model(&self) -> Model {
        self.session.lock().await.model().clone()
    }

    pub async fn temperature(&self) -> Temperature {
        self.session.lock().await.temperature()
    }

    /// Snapshot of the transcript, oldest turn first
    pub async fn transcript(&self) -> Vec<Turn> {
        self.session.lock().await.transcript().to_vec()
    }

    pub async fn turn_count(&self) -> usize {
        self.session.lock().await.turn_count()
    }

    /// Models currently served by the remote endpoint.
    ///
    /// The result is not cached and may be stale by the time a chat call is made.
    pub async fn list_available_models(&self) -> Result<Vec<Model>, TransportError> {
        let endpoint = self.endpoint().await;
        let models = self
            .call_with_policy(&NoProgress, || self.transport.list_models(&endpoint))
            .await?;
        debug!("Discovered {} models at {}", models.len(), endpoint);
        Ok(models)
    }

    /// Switch the active model. The name is not checked against discovery.
    pub async fn select_model(&self, model: impl Into<Model>) {
        let model = model.into();
        info!("Switching model to {}", model);
        self.session.lock().await.select_model(model);
    }

    pub async fn set_temperature(&self, temperature: Temperature) {
        self.session.lock().await.set_temperature(temperature);
    }

    /// Clear the transcript. Safe to call when it is already empty.
    pub async fn reset_conversation(&self) {
        self.session.lock().await.reset();
        info!("Conversation history reset");
    }

    /// Send a user turn with default (no-op) progress
    pub async fn send_message(&self, user_text: &str) -> Result<AssistantReply, TransportError> {
        self.send_message_with_progress(user_text, &NoProgress).await
    }

    /// Send a user turn and wait for the assistant's reply.
    ///
    /// The user turn is recorded before the call and stays recorded when the
    /// call fails. An assistant turn is recorded only for a non-empty reply.
    pub async fn send_message_with_progress(
        &self,
        user_text: &str,
        progress: &dyn ChatProgressNotifier,
    ) -> Result<AssistantReply, TransportError> {
        let mut session = self.session.lock().await;
        session.add_user_turn(user_text);

        let endpoint = session.endpoint().to_string();
        let request = ChatRequest {
            model: session.model().clone(),
            messages: session.transcript().to_vec(),
            temperature: session.temperature(),
        };

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            temperature = %request.temperature,
            "Sending chat request"
        );

        progress.on_request_start(&request.model);
        let started = Instant::now();
        let result = self
            .call_with_policy(progress, || self.transport.chat(&endpoint, &request))
            .await;
        progress.on_request_complete(&request.model, result.is_ok());

        let content = match result {
            Ok(content) => content,
            Err(e) => {
                warn!("Chat request to {} failed: {}", request.model, e);
                return Err(e);
            }
        };

        info!(
            model = %request.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chat reply received"
        );

        let reply = AssistantReply::from_content(content);
        match &reply {
            AssistantReply::Text(text) => session.add_assistant_turn(text.clone()),
            AssistantReply::Empty => debug!("Empty reply, nothing recorded"),
        }
        Ok(reply)
    }

    /// Run one remote operation under the configured timeout and retry policy
    async fn call_with_policy<R, F, Fut>(
        &self,
        progress: &dyn ChatProgressNotifier,
        op: F,
    ) -> Result<R, TransportError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, TransportError>>,
    {
        let retry = self.behavior.retry;
        let mut attempt = 0;
        loop {
            let result = match self.behavior.timeout {
                Some(limit) => match tokio::time::timeout(limit, op()).await {
                    Ok(result) => result,
                    Err(_) => Err(TransportError::Timeout),
                },
                None => op().await,
            };

            match result {
                Err(e) if e.is_retryable() && attempt < retry.max_retries => {
                    attempt += 1;
                    warn!(
                        "Attempt {} of {} failed: {}",
                        attempt,
                        retry.max_retries + 1,
                        e
                    );
                    progress.on_retry(attempt, &e);
                    tokio::time::sleep(retry.delay).await;
                }
                other => return other,
            }
        }
    }
}
