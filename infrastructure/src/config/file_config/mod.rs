//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and
//! transport settings once validated.

mod chat;
mod output;
mod repl;
mod server;

pub use chat::FileChatConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use server::FileServerConfig;

use crate::ollama::transport::TransportSettings;
use parley_application::BehaviorConfig;
use parley_domain::Temperature;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("server endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("temperature must be within [0, 1], got {0}")]
    InvalidTemperature(f64),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote server settings
    pub server: FileServerConfig,
    /// Model and sampling settings
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.server.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.server.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        if self.chat.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if Temperature::new(self.chat.temperature).is_err() {
            return Err(ConfigValidationError::InvalidTemperature(
                self.chat.temperature,
            ));
        }

        Ok(())
    }

    /// Validated sampling temperature
    pub fn temperature(&self) -> Result<Temperature, ConfigValidationError> {
        Temperature::new(self.chat.temperature)
            .map_err(|_| ConfigValidationError::InvalidTemperature(self.chat.temperature))
    }

    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.server.timeout_seconds)
            .with_retry(self.chat.retry_policy())
    }

    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            api_key: self.server.resolve_api_key(),
            connect_timeout: Duration::from_secs(self.server.connect_timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
endpoint = "http://gpu-box:11434"
timeout_seconds = 120

[chat]
model = "llama3.2:3b"
temperature = 0.3
max_retries = 2
retry_delay_ms = 250

[repl]
show_progress = false
history_file = "~/.local/share/parley/history.txt"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.endpoint, "http://gpu-box:11434");
        assert_eq!(config.chat.model().as_str(), "llama3.2:3b");
        assert_eq!(config.temperature().unwrap().value(), 0.3);
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);

        let behavior = config.behavior_config();
        assert_eq!(behavior.timeout, Some(Duration::from_secs(120)));
        assert_eq!(behavior.retry.max_retries, 2);
        assert_eq!(behavior.retry.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_timeout_defaults_to_five_minutes() {
        let toml_str = r#"
[server]
endpoint = "http://gpu-box:11434"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.behavior_config().timeout,
            Some(Duration::from_secs(300))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[chat]
model = "qwen2.5:7b"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.model, "qwen2.5:7b");
        // Defaults should apply
        assert_eq!(config.server.endpoint, "http://localhost:11434");
        assert_eq!(config.chat.temperature, 0.7);
        assert!(config.repl.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.behavior_config().retry.max_retries, 0);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.server.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = FileConfig::default();
        config.chat.model = "   ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = FileConfig::default();
        config.server.endpoint = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = FileConfig::default();
        config.chat.temperature = 1.5;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(1.5))
        );
    }
}
