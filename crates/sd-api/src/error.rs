//! Resource fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching or normalizing a resource.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect, timeout, TLS, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body (may be empty).
        body: String,
    },

    /// The request succeeded but the collection was empty or missing.
    #[error("no data available")]
    NoData,

    /// The body was not the JSON shape expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// A path identifier was rejected before any request was made.
    #[error(transparent)]
    InvalidId(#[from] sd_core::CoreError),
}

impl ApiError {
    /// Whether this error means "nothing to show" rather than a failure.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// `{error}` message from a structured error body, if the body carries one.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .map(str::to_string)
    }
}
