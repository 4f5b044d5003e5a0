//! # cram-api
//!
//! Typed HTTP gateway client for the Cram API.
//!
//! The remote API owns document storage, text extraction, summarization,
//! question generation, grading, and conversation persistence. This crate
//! translates typed calls into HTTP requests against fixed path templates
//! and decodes every 2xx body into the `cram-core` entities at the boundary.
//!
//! One resource module per concern, each extending [`ApiClient`] with an
//! `impl` block:
//! - `auth` — register / login / logout
//! - `notes` — upload, list, fetch, delete
//! - `qa` — per-note question answering and conversation history
//! - `quiz` — question generation, answer submission, graded review
//!
//! There is no retry, no backoff, and no request cancellation here: one call,
//! one request, one typed result.

pub mod auth;
pub mod notes;
pub mod qa;
pub mod quiz;

mod error;
mod http;

pub use error::ApiError;

use cram_auth::Session;

/// HTTP client for the Cram API, bound to one [`Session`].
///
/// Requests carry `Authorization: Bearer <token>` exactly when the session
/// holds a token. There is no client-side auth pre-check: an unauthenticated
/// protected call simply comes back non-2xx.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client against `base_url` with the given request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64, session: Session) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("cram/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Compose the absolute URL for a fixed path template.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token when the session holds one.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}
