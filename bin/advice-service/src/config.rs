//! Advice service configuration.
//!
//! Loaded from environment variables: `LISTEN_ADDR` and
//! `CATALOG__SEED_PATH`.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Socket address to listen on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the advice records come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON seed file; the bundled seed is used when unset.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            config::Config::builder().add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    /// Builds configuration from prepared sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be deserialized.
    pub fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
