//! Chat configuration from TOML (`[chat]` section)

use parley_application::RetryPolicy;
use parley_domain::{Model, Temperature};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model selected at startup
    pub model: String,
    /// Sampling temperature in [0, 1]
    pub temperature: f64,
    /// Extra attempts after a connection failure or timeout (0 = no retry)
    pub max_retries: u32,
    /// Fixed pause between attempts
    pub retry_delay_ms: u64,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: Model::DEFAULT.to_string(),
            temperature: Temperature::DEFAULT,
            max_retries: 0,
            retry_delay_ms: 1000,
        }
    }
}

impl FileChatConfig {
    pub fn model(&self) -> Model {
        Model::new(self.model.trim())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(self.max_retries, Duration::from_millis(self.retry_delay_ms))
    }
}
