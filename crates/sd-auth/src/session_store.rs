use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use sd_config::SpaceDashConfig;
use sd_core::Session;
use serde::Serialize;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "spacedash-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

const ENV_TOKEN: &str = "SPACEDASH_SESSION__TOKEN";
const ENV_EMAIL: &str = "SPACEDASH_SESSION__EMAIL";

/// Keyring service name. `SPACEDASH_KEYRING_SERVICE` overrides it so tests
/// never touch a real entry.
fn keyring_service() -> String {
    std::env::var("SPACEDASH_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Where a loaded session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    Keyring,
    Env,
    File,
}

impl SessionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent home of the session (token and email as one JSON entry).
///
/// Load priority: keyring (when enabled) → env vars → session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    use_keyring: bool,
}

impl SessionStore {
    /// File-only store rooted at `dir`.
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            use_keyring: false,
        }
    }

    /// Store configured by `general.session_dir` and `general.use_keyring`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] when no home directory can be
    /// resolved and no explicit `session_dir` is set.
    pub fn from_config(config: &SpaceDashConfig) -> Result<Self, AuthError> {
        let dir = config.session_dir().ok_or_else(|| {
            AuthError::SessionStore("home directory not found; set general.session_dir".into())
        })?;
        Ok(Self {
            dir,
            use_keyring: config.general.use_keyring,
        })
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// Persist the session and report where it went. With the keyring
    /// enabled, a keyring failure falls back to the file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the file cannot be written.
    pub fn store(&self, session: &Session) -> Result<SessionSource, AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;

        if self.use_keyring {
            match keyring::Entry::new(&keyring_service(), KEYRING_USER)
                .and_then(|entry| entry.set_password(&json))
            {
                Ok(()) => return Ok(SessionSource::Keyring),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }

        write_private(&self.path(), &json)?;
        Ok(SessionSource::File)
    }

    /// Load the session from the first tier that has one.
    #[must_use]
    pub fn load(&self) -> Option<(Session, SessionSource)> {
        if self.use_keyring
            && let Some(session) = load_keyring()
        {
            return Some((session, SessionSource::Keyring));
        }

        if let Some(session) = from_env_values(
            std::env::var(ENV_TOKEN).ok(),
            std::env::var(ENV_EMAIL).ok(),
        ) {
            return Some((session, SessionSource::Env));
        }

        self.load_file().map(|session| (session, SessionSource::File))
    }

    /// Remove the session from the keyring (when enabled) and the file
    /// together. Both tiers are attempted before an error is reported.
    ///
    /// Env-provided sessions are read-only and survive a clear.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the keyring entry cannot be
    /// deleted or the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        let keyring = if self.use_keyring {
            keyring::Entry::new(&keyring_service(), KEYRING_USER)
                .and_then(|entry| entry.delete_credential())
                .map_or_else(keyring_cleared, |()| Ok(()))
        } else {
            Ok(())
        };

        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        keyring
    }

    fn load_file(&self) -> Option<Session> {
        let path = self.path();
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_valid() => Some(session),
            Ok(_) => None,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
                None
            }
        }
    }
}

fn load_keyring() -> Option<Session> {
    let entry = keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()?;
    let raw = entry.get_password().ok()?;
    serde_json::from_str::<Session>(&raw)
        .ok()
        .filter(Session::is_valid)
}

/// A missing keyring entry already counts as cleared.
fn keyring_cleared(error: keyring::Error) -> Result<(), AuthError> {
    match error {
        keyring::Error::NoEntry => Ok(()),
        other => Err(AuthError::SessionStore(format!(
            "failed to delete keyring entry: {other}"
        ))),
    }
}

/// Session from the env tier. A token is required; the email may be absent.
fn from_env_values(token: Option<String>, email: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    Some(Session::new(token, email.unwrap_or_default()))
}

fn write_private(path: &Path, contents: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, contents)
        .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}
