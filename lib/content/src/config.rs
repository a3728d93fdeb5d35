//! Content Service connection settings.

use serde::Deserialize;
use std::time::Duration;

/// Where and how to reach the Content Service.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Scheme, host and port of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the random-advice endpoint.
    #[serde(default = "default_advice_path")]
    pub advice_path: String,

    /// Upper bound for one advice request, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_advice_path() -> String {
    "/api/advice/".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            advice_path: default_advice_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ContentConfig {
    /// Returns the full advice endpoint URL as a string.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.advice_path.trim_start_matches('/')
        )
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
