//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as per-call timeouts and retry policies.

use std::time::Duration;

/// Timeout applied to each remote call when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// Retry policy for remote calls.
///
/// The default performs no retry. When enabled, only connection failures and
/// timeouts are retried, after a fixed `delay`; status and parse errors are
/// returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// Additional attempts after the first one
    pub max_retries: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fixed(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }
}

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for remote calls.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a single remote call. `None` waits forever.
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            retry: RetryPolicy::none(),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_timeout_and_no_retry() {
        let config = BehaviorConfig::default();
        assert_eq!(config.timeout, Some(Duration::from_secs(300)));
        assert_eq!(config.retry.max_retries, 0);
    }

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(BehaviorConfig::from_timeout_seconds(None).timeout, None);
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(5)).timeout,
            Some(Duration::from_secs(5))
        );
    }
}
