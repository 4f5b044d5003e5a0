use crate::error::AuthError;
use crate::token_store::{TokenSource, TokenStore};

/// Authenticated context threaded through the API client.
///
/// Holds the resolved bearer token (if any) together with the store it came
/// from, so login and logout update the in-memory token and the persisted
/// credential in one place. There is no global token state: whoever owns the
/// session decides what is authenticated.
#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    store: TokenStore,
}

impl Session {
    /// Build a session by resolving the stored token through the store's
    /// fallback chain.
    #[must_use]
    pub fn load(store: TokenStore) -> Self {
        let token = store.load();
        Self { token, store }
    }

    /// Session with no token. Requests made under it carry no
    /// `Authorization` header.
    #[must_use]
    pub fn anonymous(store: TokenStore) -> Self {
        Self { token: None, store }
    }

    /// Session seeded with a fixed token, without touching the store.
    #[must_use]
    pub fn with_token(store: TokenStore, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            store,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Adopt and persist a fresh token (login/register).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the token cannot be persisted.
    /// The in-memory token is left unchanged in that case.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), AuthError> {
        let token = token.into();
        self.store.store(&token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Drop the token and clear persisted credentials (logout).
    ///
    /// Purely local: the server is never called.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be
    /// removed. The in-memory token is cleared regardless.
    pub fn clear(&mut self) -> Result<(), AuthError> {
        self.token = None;
        self.store.delete()
    }

    /// Which tier the persisted token resolves from (for status display).
    #[must_use]
    pub fn source(&self) -> Option<TokenSource> {
        self.store.source()
    }
}
