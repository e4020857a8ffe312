//! Legistar API error types.

use thiserror::Error;

/// Errors that can occur when talking to the Legistar Web API.
#[derive(Debug, Error)]
pub enum LegistarError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),
}
