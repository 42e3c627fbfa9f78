use thiserror::Error;

/// Client-side signup input rejected before submission.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email must be a valid @gmail.com address.")]
    InvalidEmail,

    #[error(
        "Password must be at least 8 characters long and include at least one letter, one number, and one special character."
    )]
    WeakPassword,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The auth backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("auth request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected auth response: {0}")]
    MalformedResponse(String),

    #[error("not signed in; run `spacedash auth login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    SessionStore(String),
}
