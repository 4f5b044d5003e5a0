//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the Cram API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path the response came from.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Token persistence failed during login or logout.
    #[error(transparent)]
    Auth(#[from] cram_auth::AuthError),
}
