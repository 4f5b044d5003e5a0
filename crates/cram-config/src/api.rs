//! Cram API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Hosted Cram API base, including the `/api` prefix every path hangs off.
pub const DEFAULT_BASE_URL: &str = "https://api.cram.study/api";

const fn default_timeout_secs() -> u64 {
    60
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are appended to. Point this at a
    /// self-hosted backend to use one.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Question generation and grading run LLM calls
    /// server-side, so this is generous by default.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Check if the API config is usable.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}
