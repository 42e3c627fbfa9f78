use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::loose::{self, Named};
use super::Resource;

/// A launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    #[serde(deserialize_with = "crate::ids::deserialize")]
    pub id: String,
    pub name: String,
    /// Scheduled ("no earlier than") time.
    #[serde(default)]
    pub net: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "loose::opt_named")]
    pub status: Option<LaunchStatus>,
    #[serde(default, deserialize_with = "loose::opt_image")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "loose::opt_named")]
    pub mission: Option<Mission>,
    #[serde(default, deserialize_with = "loose::opt_named")]
    pub launch_service_provider: Option<Provider>,
    #[serde(default)]
    pub rocket: Option<Rocket>,
    #[serde(default, deserialize_with = "loose::opt_named")]
    pub pad: Option<Pad>,
}

impl Launch {
    /// Rocket configuration, when both `rocket` and its configuration are present.
    #[must_use]
    pub fn rocket_configuration(&self) -> Option<&RocketConfiguration> {
        self.rocket.as_ref().and_then(|r| r.configuration.as_ref())
    }

    /// Whether the status name or abbreviation matches one of `statuses`
    /// (case-insensitive).
    #[must_use]
    pub fn has_status_in(&self, statuses: &[String]) -> bool {
        let Some(status) = &self.status else {
            return false;
        };
        statuses.iter().any(|wanted| {
            status.name.eq_ignore_ascii_case(wanted)
                || status
                    .abbrev
                    .as_deref()
                    .is_some_and(|abbrev| abbrev.eq_ignore_ascii_case(wanted))
        })
    }
}

impl Resource for Launch {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchStatus {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbrev: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "loose::opt_name")]
    pub mission_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "loose::opt_name")]
    pub provider_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default)]
    pub configuration: Option<RocketConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketConfiguration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "loose::opt_name")]
    pub location: Option<String>,
}

impl Named for LaunchStatus {
    fn from_name(name: String) -> Self {
        Self { name, abbrev: None }
    }
}

impl Named for Mission {
    fn from_name(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

impl Named for Provider {
    fn from_name(name: String) -> Self {
        Self {
            name,
            provider_type: None,
        }
    }
}

impl Named for Pad {
    fn from_name(name: String) -> Self {
        Self {
            name,
            location: None,
        }
    }
}
