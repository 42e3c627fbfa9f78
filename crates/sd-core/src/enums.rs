//! Resource kinds and launch tabs.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// An external API entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Agency,
    Astronaut,
    Launch,
    Program,
}

impl ResourceKind {
    pub const ALL: [Self; 4] = [Self::Agency, Self::Astronaut, Self::Launch, Self::Program];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agency => "agency",
            Self::Astronaut => "astronaut",
            Self::Launch => "launch",
            Self::Program => "program",
        }
    }

    /// Path segment of the collection endpoint under `/api/space/`.
    #[must_use]
    pub const fn collection_segment(self) -> &'static str {
        match self {
            Self::Agency => "agencies",
            Self::Astronaut => "astronauts",
            Self::Launch => "launches",
            Self::Program => "programs",
        }
    }

    /// Plural noun used in user-visible messages.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Agency => "agencies",
            Self::Astronaut => "astronauts",
            Self::Launch => "launches",
            Self::Program => "programs",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agency" | "agencies" => Ok(Self::Agency),
            "astronaut" | "astronauts" => Ok(Self::Astronaut),
            "launch" | "launches" => Ok(Self::Launch),
            "program" | "programs" => Ok(Self::Program),
            _ => Err(CoreError::UnknownResource(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchTab
// ---------------------------------------------------------------------------

/// Filter tab of the launch list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTab {
    #[default]
    Upcoming,
    Previous,
    Live,
}

impl LaunchTab {
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Previous, Self::Live];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Previous => "previous",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for LaunchTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "previous" | "past" => Ok(Self::Previous),
            "live" => Ok(Self::Live),
            _ => Err(CoreError::UnknownTab(s.to_string())),
        }
    }
}
