//! CLI configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into
//! validated slot defaults.

use fixture_engine::SlotConfig;

/// Default match length when neither flag nor environment sets one
const DEFAULT_MATCH_DURATION_MINUTES: i64 = 90;

/// Default gap between waves
const DEFAULT_BREAK_MINUTES: i64 = 15;

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Duration and break applied when a request leaves them out
    pub slot_defaults: SlotConfig,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `duration_override` - Match duration from `--duration`
    /// * `break_override` - Break from `--break`
    ///
    /// Flags take precedence over `FIXTURE_MATCH_DURATION_MINUTES` and
    /// `FIXTURE_BREAK_MINUTES`.
    pub fn from_env(duration_override: Option<i64>, break_override: Option<i64>) -> Self {
        let match_duration_minutes = duration_override.unwrap_or_else(|| {
            parse_env_or(
                "FIXTURE_MATCH_DURATION_MINUTES",
                DEFAULT_MATCH_DURATION_MINUTES,
            )
        });
        let break_minutes = break_override
            .unwrap_or_else(|| parse_env_or("FIXTURE_BREAK_MINUTES", DEFAULT_BREAK_MINUTES));

        Self {
            slot_defaults: SlotConfig {
                match_duration_minutes,
                break_minutes,
                ..SlotConfig::default()
            },
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_defaults.match_duration_minutes <= 0 {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_MATCH_DURATION_MINUTES".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.slot_defaults.break_minutes < 0 {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_BREAK_MINUTES".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
