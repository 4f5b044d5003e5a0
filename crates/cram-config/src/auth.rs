//! Token storage configuration.

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "cram-cli".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Keyring service name the token is filed under. Override for test
    /// environments (e.g. `cram-cli-test`) to avoid touching real credentials.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Override for the credentials fallback file. Empty means the default
    /// `~/.cram/credentials`.
    #[serde(default)]
    pub credentials_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            credentials_file: String::new(),
        }
    }
}
