//! Shared HTTP response helpers for the Legistar client.
//!
//! Centralizes the status-code check (non-success → [`LegistarError::Api`])
//! and JSON decoding so endpoint modules stay focused on request
//! construction and expansion.

use crate::error::LegistarError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`LegistarError::Api`] with the status code and response body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, LegistarError> {
    if !resp.status().is_success() {
        return Err(LegistarError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON response body, labelling parse failures with `what`.
pub async fn parse_json<T>(resp: reqwest::Response, what: &str) -> Result<T, LegistarError>
where
    T: serde::de::DeserializeOwned,
{
    resp.json()
        .await
        .map_err(|e| LegistarError::Parse(format!("{what} parse error: {e}")))
}
