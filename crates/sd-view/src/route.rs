//! Path routes of the dashboard.

use std::fmt;
use std::str::FromStr;

use sd_core::enums::ResourceKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),

    #[error("invalid identifier in route: {0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    /// Launch list.
    Home,
    Agencies,
    Agency(String),
    Astronauts,
    Astronaut(String),
    Programs,
    Program(String),
    Launch(String),
    Profile,
}

impl Route {
    /// Parse a path such as `/astronaut/42`. A trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// [`RouteError::Unknown`] for unmatched paths, [`RouteError::InvalidId`]
    /// when a detail path carries an empty or malformed identifier.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        let segments: Vec<&str> = normalized.trim_start_matches('/').split('/').collect();
        let route = match segments.as_slice() {
            [""] => Self::Landing,
            ["signin"] => Self::SignIn,
            ["signup"] => Self::SignUp,
            ["home"] => Self::Home,
            ["agencies"] => Self::Agencies,
            ["astronauts"] => Self::Astronauts,
            ["programs"] => Self::Programs,
            ["profile"] => Self::Profile,
            [kind @ ("agency" | "astronaut" | "program" | "launch"), id] => {
                let id = sd_core::ids::validate(id)
                    .map_err(|_| RouteError::InvalidId(trimmed.to_string()))?;
                let kind: ResourceKind = kind
                    .parse()
                    .map_err(|_| RouteError::Unknown(trimmed.to_string()))?;
                Self::detail(kind, id)
            }
            _ => return Err(RouteError::Unknown(trimmed.to_string())),
        };
        Ok(route)
    }

    /// Detail route for one record.
    #[must_use]
    pub fn detail(kind: ResourceKind, id: impl Into<String>) -> Self {
        let id = id.into();
        match kind {
            ResourceKind::Agency => Self::Agency(id),
            ResourceKind::Astronaut => Self::Astronaut(id),
            ResourceKind::Launch => Self::Launch(id),
            ResourceKind::Program => Self::Program(id),
        }
    }

    /// Collection route for a resource.
    #[must_use]
    pub const fn list(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Agency => Self::Agencies,
            ResourceKind::Astronaut => Self::Astronauts,
            ResourceKind::Launch => Self::Home,
            ResourceKind::Program => Self::Programs,
        }
    }

    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Landing => "/".into(),
            Self::SignIn => "/signin".into(),
            Self::SignUp => "/signup".into(),
            Self::Home => "/home".into(),
            Self::Agencies => "/agencies".into(),
            Self::Astronauts => "/astronauts".into(),
            Self::Programs => "/programs".into(),
            Self::Profile => "/profile".into(),
            Self::Agency(id) => format!("/agency/{id}"),
            Self::Astronaut(id) => format!("/astronaut/{id}"),
            Self::Program(id) => format!("/program/{id}"),
            Self::Launch(id) => format!("/launch/{id}"),
        }
    }

    /// Everything except landing, sign-in and sign-up needs a session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Landing | Self::SignIn | Self::SignUp)
    }

    /// Resource listed by this route, if it is a collection view.
    #[must_use]
    pub const fn list_kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Home => Some(ResourceKind::Launch),
            Self::Agencies => Some(ResourceKind::Agency),
            Self::Astronauts => Some(ResourceKind::Astronaut),
            Self::Programs => Some(ResourceKind::Program),
            _ => None,
        }
    }

    /// Resource and identifier shown by this route, if it is a detail view.
    #[must_use]
    pub fn detail_target(&self) -> Option<(ResourceKind, &str)> {
        match self {
            Self::Agency(id) => Some((ResourceKind::Agency, id)),
            Self::Astronaut(id) => Some((ResourceKind::Astronaut, id)),
            Self::Program(id) => Some((ResourceKind::Program, id)),
            Self::Launch(id) => Some((ResourceKind::Launch, id)),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.to_path()
    }
}
