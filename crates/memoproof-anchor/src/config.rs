use std::time::Duration;

use memoproof_canonical::{validate_prefix, ValidationError, DEFAULT_MEMO_PREFIX};
use memoproof_confirm::{WaitConfig, DEFAULT_POLL_INTERVAL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default time to wait for a submitted memo to confirm.
pub const DEFAULT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The memo prefix is not allowed.
    #[error("invalid memo prefix: {0}")]
    InvalidPrefix(#[from] ValidationError),
    /// A zero poll interval would spin on the status source.
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
}

/// Settings for the anchor workflow, passed in at construction time.
///
/// Deserializes from a table such as:
///
/// ```toml
/// memo_prefix = "POC_HASH"
/// confirm_timeout_ms = 30000
/// poll_interval_ms = 700
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Prefix placed before the digest in the memo text.
    pub memo_prefix: String,
    /// How long to wait for confirmation after submission.
    #[serde(rename = "confirm_timeout_ms", with = "millis")]
    pub confirm_timeout: Duration,
    /// Pause between status queries.
    #[serde(rename = "poll_interval_ms", with = "millis")]
    pub poll_interval: Duration,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            memo_prefix: DEFAULT_MEMO_PREFIX.to_string(),
            confirm_timeout: DEFAULT_CONFIRM_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl AnchorConfig {
    /// Checks the settings before they are used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_prefix(&self.memo_prefix)?;
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// Polling settings for the confirmation waiter.
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig {
            poll_interval: self.poll_interval,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_ledger_settings() {
        let config = AnchorConfig::default();
        assert_eq!(config.memo_prefix, "POC_HASH");
        assert_eq!(config.confirm_timeout, Duration::from_secs(30));
        assert_eq!(config.poll_interval, Duration::from_millis(700));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_table_fills_defaults() {
        let config: AnchorConfig =
            serde_json::from_value(json!({"confirm_timeout_ms": 5000})).unwrap();
        assert_eq!(config.confirm_timeout, Duration::from_secs(5));
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(config.memo_prefix, DEFAULT_MEMO_PREFIX);
    }

    #[test]
    fn serializes_durations_as_millis() {
        let value = serde_json::to_value(AnchorConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "memo_prefix": "POC_HASH",
                "confirm_timeout_ms": 30000,
                "poll_interval_ms": 700
            })
        );
    }

    #[test]
    fn rejects_bad_settings() {
        let config = AnchorConfig {
            memo_prefix: "has space".into(),
            ..AnchorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPrefix(_))));

        let config = AnchorConfig {
            poll_interval: Duration::ZERO,
            ..AnchorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPollInterval)));
    }
}
