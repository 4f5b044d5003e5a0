//! Shared HTTP response helpers for the gateway client.
//!
//! Centralizes the non-success status check and the typed decode step so the
//! per-resource modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise consumes the body
/// into [`ApiError::Api`] with the status code and body text.
pub(crate) async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a 2xx response body into a typed value.
///
/// A body that does not match `T` fails with [`ApiError::Decode`] naming the
/// endpoint; the offending body is logged at debug level since the error
/// itself only carries the serde message.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| {
        tracing::debug!(endpoint, body = %truncate(&body, 512), "response body failed to decode");
        ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    })
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
