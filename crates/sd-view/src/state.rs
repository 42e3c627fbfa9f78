//! View states and user-facing view errors.
//!
//! ```text
//! Loading → Ready | Error | Empty (list views only)
//! any     → Loading (new cycle)
//! ```

use std::fmt;

use sd_api::ApiError;
use sd_core::enums::ResourceKind;
use serde::Serialize;

/// Whether a view shows a collection or a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Detail,
}

/// Data-free phase of a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    Loading,
    Ready,
    Error,
    Empty,
}

impl ViewPhase {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Loading => &[Self::Loading, Self::Ready, Self::Error, Self::Empty],
            Self::Ready | Self::Error | Self::Empty => &[Self::Loading],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Error => "error",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong, without the user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Status(u16),
    NotFound,
    Parse,
    InvalidId,
}

/// Error shown inline in place of a view's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewError {
    pub message: String,
    pub kind: ErrorKind,
    /// Underlying error text, for logs and `--verbose`.
    pub detail: String,
}

impl ViewError {
    /// Map a fetch failure to the message a view of `resource` shows.
    #[must_use]
    pub fn from_api(error: &ApiError, resource: ResourceKind, mode: ViewMode) -> Self {
        let kind = match error {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Api { status: 404, .. } | ApiError::NoData => ErrorKind::NotFound,
            ApiError::Api { status, .. } => ErrorKind::Status(*status),
            ApiError::Parse(_) => ErrorKind::Parse,
            ApiError::InvalidId(_) => ErrorKind::InvalidId,
        };
        let message = match (mode, kind) {
            (ViewMode::Detail, ErrorKind::NotFound | ErrorKind::InvalidId) => {
                format!("{} not found", title_case(resource.as_str()))
            }
            (ViewMode::Detail, _) => format!(
                "Failed to fetch {} details. Please try again later.",
                resource.as_str()
            ),
            (ViewMode::List, _) => format!(
                "Failed to fetch {}. Please try again later.",
                resource.plural()
            ),
        };
        Self {
            message,
            kind,
            detail: error.to_string(),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Lifecycle of one view instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(ViewError),
    Empty,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    #[must_use]
    pub const fn phase(&self) -> ViewPhase {
        match self {
            Self::Loading => ViewPhase::Loading,
            Self::Ready(_) => ViewPhase::Ready,
            Self::Error(_) => ViewPhase::Error,
            Self::Empty => ViewPhase::Empty,
        }
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ViewError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// "No astronauts found" style message for an empty list view.
#[must_use]
pub fn empty_message(resource: ResourceKind) -> String {
    format!("No {} found", resource.plural())
}

pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
