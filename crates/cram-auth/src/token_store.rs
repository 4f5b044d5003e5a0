use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const KEYRING_USER: &str = "api-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV_VAR: &str = "CRAM_AUTH__TOKEN";

/// Which tier a stored token was resolved from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted token storage with a tiered fallback chain.
///
/// Resolution priority: keyring -> `CRAM_AUTH__TOKEN` env -> file
/// (`~/.cram/credentials`). Writes prefer the OS keychain and fall back to
/// the file when the keyring is unavailable.
#[derive(Debug, Clone)]
pub struct TokenStore {
    /// Keyring service name. Empty makes the store file-only (keyring and
    /// env tiers are skipped), which keeps tests hermetic.
    service: String,
    /// Explicit credentials file path. Empty means `~/.cram/credentials`.
    credentials_file: String,
}

impl TokenStore {
    /// Build a store from config values.
    ///
    /// `credentials_file` may be empty to use the default path under the
    /// home directory.
    #[must_use]
    pub fn new(service: &str, credentials_file: &str) -> Self {
        Self {
            service: service.to_string(),
            credentials_file: credentials_file.to_string(),
        }
    }

    /// File-only store rooted at an explicit path.
    ///
    /// Skips the keyring and env tiers entirely. Used by tests.
    #[must_use]
    pub fn at_file(path: impl Into<PathBuf>) -> Self {
        Self {
            service: String::new(),
            credentials_file: path.into().display().to_string(),
        }
    }

    /// Store a token. Prefers the OS keychain, falls back to file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keyring and file storage
    /// fail.
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        if self.system_tiers_enabled() {
            match keyring::Entry::new(&self.service, KEYRING_USER) {
                Ok(entry) => match entry.set_password(token) {
                    Ok(()) => return Ok(()),
                    Err(error) => {
                        tracing::warn!(%error, "keyring store failed; falling back to file");
                    }
                },
                Err(error) => {
                    tracing::warn!(%error, "keyring unavailable; falling back to file");
                }
            }
        }
        self.store_file(token)
    }

    /// Load a token. Priority: keyring -> env -> file.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        // 1. Keyring
        if self.system_tiers_enabled()
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }

        // 2. Environment variable
        if self.system_tiers_enabled()
            && let Ok(token) = std::env::var(TOKEN_ENV_VAR)
            && !token.is_empty()
        {
            return Some(token);
        }

        // 3. File fallback
        self.load_file()
    }

    /// Delete stored credentials from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be
    /// removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        // Delete from keyring (ignore errors — may not exist)
        if self.system_tiers_enabled()
            && let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
        {
            let _ = entry.delete_credential();
        }

        // Delete credentials file
        let path = self.credentials_path()?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    /// Detect which tier the current token came from (for status display).
    #[must_use]
    pub fn source(&self) -> Option<TokenSource> {
        if self.system_tiers_enabled() {
            if let Ok(entry) = keyring::Entry::new(&self.service, KEYRING_USER)
                && entry.get_password().is_ok_and(|t| !t.is_empty())
            {
                return Some(TokenSource::Keyring);
            }
            if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.is_empty()) {
                return Some(TokenSource::Env);
            }
        }
        if self.load_file().is_some() {
            return Some(TokenSource::File);
        }
        None
    }

    // --- Private helpers ---

    fn system_tiers_enabled(&self) -> bool {
        !self.service.is_empty()
    }

    fn credentials_path(&self) -> Result<PathBuf, AuthError> {
        if !self.credentials_file.is_empty() {
            return Ok(PathBuf::from(&self.credentials_file));
        }
        dirs::home_dir()
            .map(|h| h.join(".cram").join(CREDENTIALS_FILE_NAME))
            .ok_or_else(|| {
                AuthError::TokenStoreError(
                    "home directory not found — cannot store credentials".into(),
                )
            })
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = self.credentials_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&path, token)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.credentials_path().ok()?;
        fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
