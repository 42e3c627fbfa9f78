//! # sd-auth
//!
//! Authentication for spacedash: the token backend client (`/api/login`,
//! `/api/signup`), client-side signup validation, and session persistence
//! (session file by default, OS keychain when enabled, env vars as a
//! read-only tier).
//!
//! The loaded session travels as an explicit [`SessionContext`] value; no
//! view reads storage on its own.

pub mod client;
pub mod error;
pub mod session_store;
pub mod validation;

pub use client::{AuthClient, SignupAck};
pub use error::{AuthError, ValidationError};
pub use session_store::{SessionSource, SessionStore};

use sd_core::Session;

/// The current session plus the store it is persisted in.
///
/// Set on login, cleared on logout. Everything else only reads it.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: Option<(Session, SessionSource)>,
}

impl SessionContext {
    /// Restore whatever session the store holds.
    #[must_use]
    pub fn restore(store: SessionStore) -> Self {
        let current = store.load();
        if let Some((session, source)) = &current {
            tracing::debug!(email = %session.email, %source, "session restored");
        }
        Self { store, current }
    }

    /// Context holding `session` without touching storage.
    #[must_use]
    pub const fn with_session(store: SessionStore, session: Option<(Session, SessionSource)>) -> Self {
        Self {
            store,
            current: session,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.current
            .as_ref()
            .map(|(session, _)| session)
            .filter(|session| session.is_valid())
    }

    #[must_use]
    pub fn source(&self) -> Option<SessionSource> {
        self.current.as_ref().map(|(_, source)| *source)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when no valid session is held.
    pub fn require(&self) -> Result<&Session, AuthError> {
        self.session().ok_or(AuthError::NotAuthenticated)
    }

    /// Log in and persist the new session.
    ///
    /// # Errors
    ///
    /// Anything [`AuthClient::login`] or [`SessionStore::store`] returns. A
    /// failed login leaves the previous session untouched.
    pub async fn login(
        &mut self,
        client: &AuthClient,
        email: &str,
        password: &str,
    ) -> Result<&Session, AuthError> {
        let session = client.login(email, password).await?;
        let source = self.store.store(&session)?;
        let (session, _) = self.current.insert((session, source));
        Ok(session)
    }

    /// Clear the session from memory and storage.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if stored credentials cannot be
    /// removed.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.current = None;
        self.store.clear()
    }
}

/// Resolve the stored session without building a context.
#[must_use]
pub fn resolve_session(store: &SessionStore) -> Option<Session> {
    store.load().map(|(session, _)| session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_requires_login() {
        let tmp = tempfile::TempDir::new().unwrap();
        let ctx = SessionContext::with_session(SessionStore::at(tmp.path()), None);
        assert!(!ctx.is_authenticated());
        assert!(matches!(ctx.require(), Err(AuthError::NotAuthenticated)));
    }

    #[test]
    fn logout_clears_memory_and_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = SessionStore::at(tmp.path());
        let session = Session::new("tok", "user@gmail.com");
        store.store(&session).unwrap();

        let mut ctx =
            SessionContext::with_session(store.clone(), Some((session, SessionSource::File)));
        assert_eq!(ctx.require().unwrap().email, "user@gmail.com");

        ctx.logout().unwrap();
        assert!(ctx.session().is_none());
        assert!(!store.path().exists());
    }
}
