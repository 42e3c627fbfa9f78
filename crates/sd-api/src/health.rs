//! Backend health check (`GET /api/health`).

use serde::{Deserialize, Serialize};

use crate::{ApiError, SpaceClient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    /// Milliseconds since the Unix epoch, as reported by the backend.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

impl SpaceClient {
    /// Check that the backend is up.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unexpected body.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let body = self.get_json("/api/health").await?;
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}
