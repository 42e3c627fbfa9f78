//! Resource identifiers.
//!
//! Upstream identifiers are integers for agencies, astronauts and programs and
//! UUID strings for launches. Both are carried as `String`.

use serde::{Deserialize, Deserializer};

use crate::errors::CoreError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Deserialize an identifier that may arrive as a JSON number or string.
///
/// # Errors
///
/// Fails if the value is neither a number nor a string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Validate a user-supplied identifier before it is placed in a URL path.
///
/// Accepts ASCII alphanumerics and `-` (covers integer ids and UUIDs).
///
/// # Errors
///
/// Returns [`CoreError::InvalidId`] for empty input or any other character.
pub fn validate(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
    {
        return Err(CoreError::InvalidId(raw.to_string()));
    }
    Ok(trimmed)
}
