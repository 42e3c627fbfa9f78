//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_live_statuses() -> Vec<String> {
    vec!["In Flight".to_string(), "Go".to_string()]
}

/// Where "live" launches are filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveFilter {
    /// Fetch the generic launch collection and keep records whose status is
    /// listed in `live_statuses`.
    #[default]
    Client,
    /// Ask the backend with `type=live`.
    Server,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    #[serde(default)]
    pub live_filter: LiveFilter,

    /// Status names/abbreviations treated as live when filtering client-side.
    #[serde(default = "default_live_statuses")]
    pub live_statuses: Vec<String>,

    /// Directory for the session file. Empty means `~/.spacedash`.
    #[serde(default)]
    pub session_dir: String,

    /// Keep the session in the OS keychain instead of the session file.
    #[serde(default)]
    pub use_keyring: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            live_filter: LiveFilter::default(),
            live_statuses: default_live_statuses(),
            session_dir: String::new(),
            use_keyring: false,
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
