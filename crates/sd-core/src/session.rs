use serde::{Deserialize, Serialize};

/// Client-held proof of authentication.
///
/// Created on successful login, destroyed on logout. Token and email are
/// always stored and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token issued by the auth backend.
    pub token: String,
    /// Email the session was opened with. Display hint only.
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }

    /// A session gates protected routes only when its token is non-blank.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
