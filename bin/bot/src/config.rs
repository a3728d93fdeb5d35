//! Centralized bot configuration.
//!
//! Loaded via the `config` crate from environment variables. Nested keys use
//! `__`, e.g. `CONTENT__BASE_URL` or `SESSION__IDLE_TTL_MINUTES`.
//!
//! See [`ContentConfig`] for the Content Service settings.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use kind_words_content::ContentConfig;
use serde::Deserialize;
use std::fmt;

/// Bot configuration composed from library configs.
#[derive(Deserialize)]
pub struct BotConfig {
    /// Telegram Bot API token. Required.
    pub telegram_bot_token: String,

    /// Content Service connection.
    #[serde(default)]
    pub content: ContentConfig,

    /// Session retention.
    #[serde(default)]
    pub session: SessionConfig,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_bot_token", &"<redacted>")
            .field("content", &self.content)
            .field("session", &self.session)
            .finish()
    }
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Sessions idle for longer than this are dropped; the user starts over
    /// in the main menu.
    #[serde(default = "default_idle_ttl_minutes")]
    pub idle_ttl_minutes: i64,

    /// Interval between eviction runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,
}

fn default_idle_ttl_minutes() -> i64 {
    24 * 60
}

fn default_cleanup_interval_seconds() -> u64 {
    600
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_minutes: default_idle_ttl_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
        }
    }
}

impl SessionConfig {
    /// Returns the idle time after which a session is evicted, or `None`
    /// when the configured minutes are not positive or not representable.
    #[must_use]
    pub fn idle_ttl(&self) -> Option<chrono::Duration> {
        chrono::Duration::try_minutes(self.idle_ttl_minutes)
            .filter(|ttl| *ttl > chrono::Duration::zero())
    }
}

impl BotConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            config::Config::builder().add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    /// Builds and validates configuration from prepared sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or blank.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        if config.telegram_bot_token.trim().is_empty() {
            return Err(ConfigError::Message(
                "TELEGRAM_BOT_TOKEN must not be empty".to_string(),
            ));
        }
        if config.session.idle_ttl().is_none() {
            return Err(ConfigError::Message(format!(
                "SESSION__IDLE_TTL_MINUTES must be a positive number of minutes, got {}",
                config.session.idle_ttl_minutes
            )));
        }
        Ok(config)
    }
}
