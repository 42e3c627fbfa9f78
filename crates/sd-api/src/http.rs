//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check and JSON body decoding so resource
//! modules stay focused on request construction and response mapping.

use serde_json::Value;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`ApiError::Api`] with the status code and raw body. 429 is not special:
/// requests are never retried.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body of a successful response as JSON.
pub async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(format!("invalid JSON body: {e}")))
}
