//! # sd-api
//!
//! HTTP client for the space-data backend (`/api/space/*`).
//!
//! One GET per collection or detail request, no retries. Collection bodies
//! are unwrapped from their `results` envelope and decoded into the
//! [`sd_core::entities`] types; astronaut images are resolved from the raw
//! payload by [`image::astronaut_image`].
//!
//! Resources:
//! - agencies
//! - astronauts
//! - launches (tabbed: upcoming, previous, live)
//! - programs

pub mod agencies;
pub mod astronauts;
pub mod health;
pub mod image;
pub mod launches;
pub mod normalize;
pub mod programs;

mod error;
mod http;

pub use error::ApiError;
pub use health::HealthStatus;
pub use launches::LiveOptions;

use std::time::Duration;

use sd_config::ApiConfig;
use sd_core::Session;
use sd_core::enums::ResourceKind;
use serde_json::Value;

use crate::http::{check_response, read_json};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the space-data backend.
#[derive(Debug, Clone)]
pub struct SpaceClient {
    http: reqwest::Client,
    origin: String,
    token: Option<String>,
}

impl SpaceClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying `reqwest::Client`
    /// fails to build (e.g. no TLS backend).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            origin: config.origin().to_string(),
            token: None,
        })
    }

    /// Attach the session token (sent as a bearer token) to every request.
    #[must_use]
    pub fn with_session(mut self, session: Option<&Session>) -> Self {
        self.token = session
            .filter(|session| session.is_valid())
            .map(|session| session.token.clone());
        self
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Fetch a collection and return its raw `results` records.
    ///
    /// `params` are sent before `limit` in the query string.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] / [`ApiError::Api`] for transport and status
    /// failures, [`ApiError::NoData`] when `results` is absent or empty.
    pub async fn fetch_collection(
        &self,
        kind: ResourceKind,
        limit: u32,
        params: &[(&str, &str)],
    ) -> Result<Vec<Value>, ApiError> {
        let mut path = format!("/api/space/{}?", kind.collection_segment());
        for (key, value) in params {
            path.push_str(&format!(
                "{}={}&",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        path.push_str(&format!("limit={limit}"));

        let body = self.get_json(&path).await?;
        let records = normalize::extract_results(body)?;
        tracing::debug!(resource = %kind, count = records.len(), "collection fetched");
        Ok(records)
    }

    /// Fetch a single record by identifier.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidId`] before any request if `id` is malformed;
    /// otherwise as [`Self::fetch_collection`], with [`ApiError::Parse`]
    /// when the body is not an object.
    pub async fn fetch_detail(&self, kind: ResourceKind, id: &str) -> Result<Value, ApiError> {
        let id = sd_core::ids::validate(id)?;
        let path = format!(
            "/api/space/{}/{}",
            kind.collection_segment(),
            urlencoding::encode(id)
        );
        normalize::extract_detail(self.get_json(&path).await?)
    }

    pub(crate) async fn get_json(&self, path_and_query: &str) -> Result<Value, ApiError> {
        let url = format!("{}{path_and_query}", self.origin);
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        tracing::debug!(status = resp.status().as_u16(), %url, "response");
        read_json(check_response(resp).await?).await
    }
}
