//! HTTP client for the token backend (`/api/login`, `/api/signup`).

use std::time::Duration;

use sd_config::ApiConfig;
use sd_core::Session;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::validation;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Successful signup acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupAck {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    origin: String,
}

impl AuthClient {
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] if the `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            origin: config.origin().to_string(),
        })
    }

    /// `POST /api/login`. The returned session pairs the issued token with
    /// the (trimmed) email.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] for a non-success status (message from the
    ///   `{error}` body when present)
    /// - [`AuthError::MalformedResponse`] when the body carries no token
    /// - [`AuthError::Network`] on transport failure
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim();
        let body = self
            .post("/api/login", &Credentials { email, password }, "Login failed")
            .await?;

        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(format!("login body: {e}")))?;
        let token = parsed
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AuthError::MalformedResponse("login response has no token".into()))?;

        tracing::debug!(email, "login succeeded");
        Ok(Session::new(token, email))
    }

    /// Validate the form, then `POST /api/signup`. Nothing is sent when
    /// validation fails.
    ///
    /// # Errors
    ///
    /// [`AuthError::Validation`] before any request, otherwise as
    /// [`Self::login`].
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<SignupAck, AuthError> {
        let email = validation::validate_signup(email, password, confirm)?;
        let body = self
            .post(
                "/api/signup",
                &Credentials { email, password },
                "Registration failed",
            )
            .await?;

        if body.trim().is_empty() {
            return Ok(SignupAck::default());
        }
        serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(format!("signup body: {e}")))
    }

    async fn post(
        &self,
        path: &str,
        credentials: &Credentials<'_>,
        fallback: &str,
    ) -> Result<String, AuthError> {
        let url = format!("{}{path}", self.origin);
        tracing::debug!(%url, "POST");

        let resp = self.http.post(&url).json(credentials).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(%url, status = status.as_u16(), "auth response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(AuthError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body, fallback),
            })
        }
    }
}

/// `{error}` from the body, else the raw body, else `fallback`.
fn rejection_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value.get("error").and_then(serde_json::Value::as_str)
    {
        return message.to_string();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_error_field() {
        assert_eq!(
            rejection_message(r#"{"error": "Invalid credentials"}"#, "Login failed"),
            "Invalid credentials"
        );
    }

    #[test]
    fn rejection_falls_back() {
        assert_eq!(rejection_message("", "Login failed"), "Login failed");
        assert_eq!(rejection_message("{}", "Login failed"), "Login failed");
        assert_eq!(rejection_message("Bad Gateway", "Login failed"), "Bad Gateway");
    }

    #[tokio::test]
    async fn invalid_signup_sends_nothing() {
        let client = AuthClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            ..Default::default()
        })
        .unwrap();
        let err = client
            .signup("user@yahoo.com", "Abc12345!", "Abc12345!")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(crate::ValidationError::InvalidEmail)
        ));
    }
}
