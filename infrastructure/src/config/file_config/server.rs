//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw server connection configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL of the chat server
    pub endpoint: String,
    /// Environment variable name for the API key (default: "PARLEY_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Per-call timeout in seconds (default 300, must be positive)
    pub timeout_seconds: Option<u64>,
    pub connect_timeout_seconds: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            api_key_env: "PARLEY_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: Some(parley_application::config::DEFAULT_TIMEOUT_SECONDS),
            connect_timeout_seconds: 10,
        }
    }
}

impl FileServerConfig {
    /// The bearer key: the direct `api_key` wins, then the `api_key_env` variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        let config = FileServerConfig {
            api_key: Some("direct".to_string()),
            api_key_env: "PARLEY_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("direct".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = FileServerConfig {
            api_key_env: "PARLEY_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_blank_key_is_none() {
        let config = FileServerConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
