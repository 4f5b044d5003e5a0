//! # cram-config
//!
//! Layered configuration loading for Cram using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CRAM_*` prefix, `__` as separator)
//! 2. User-level `~/.config/cram/config.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CRAM_API__BASE_URL` -> `api.base_url`,
//! `CRAM_AUTH__KEYRING_SERVICE` -> `auth.keyring_service`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cram_config::CramConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = CramConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = CramConfig::load().expect("config");
//!
//! println!("API base: {}", config.api.base_url);
//! ```

mod api;
mod auth;
mod error;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use auth::AuthConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CramConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl CramConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to merge or extract, or if
    /// the merged config is unusable (blank `api.base_url`).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject merged configurations no request could be built from.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                figment = figment.merge(Toml::file(user_path));
            }
        }

        figment.merge(Env::prefixed("CRAM_").split("__"))
    }

    /// Path to the user-level config file (`~/.config/cram/config.toml`).
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cram").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find the workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
