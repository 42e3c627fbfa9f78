//! Cross-cutting error types for spacedash.
//!
//! Transport and auth errors live in `sd-api` and `sd-auth`. They converge
//! into `anyhow` in `sd-cli`.

use thiserror::Error;

/// Errors that can be raised by any spacedash crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A resource name did not match any known [`ResourceKind`](crate::enums::ResourceKind).
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// A launch tab name did not match any known [`LaunchTab`](crate::enums::LaunchTab).
    #[error("unknown launch tab: {0}")]
    UnknownTab(String),

    /// A record identifier was empty or malformed.
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}
