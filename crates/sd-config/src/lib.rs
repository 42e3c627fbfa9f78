//! # sd-config
//!
//! Layered configuration loading for spacedash using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPACEDASH_*` prefix, `__` as separator)
//! 2. Project-level `.spacedash/config.toml`
//! 3. User-level `~/.config/spacedash/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPACEDASH_API__BASE_URL` -> `api.base_url`,
//! `SPACEDASH_GENERAL__LIVE_FILTER` -> `general.live_filter`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sd_config::SpaceDashConfig;
//!
//! let config = SpaceDashConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.origin());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, LiveFilter};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpaceDashConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SpaceDashConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".spacedash/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SPACEDASH_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.general.validate()
    }

    /// Directory holding the session file.
    #[must_use]
    pub fn session_dir(&self) -> Option<PathBuf> {
        if self.general.session_dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".spacedash"))
        } else {
            Some(PathBuf::from(&self.general.session_dir))
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spacedash").join("config.toml"))
    }
}
