//! Account endpoints: register, login, logout.
//!
//! Login and register hand back a bearer token which is persisted through
//! the client's [`Session`](cram_auth::Session); logout is purely local and
//! never calls the server.

use cram_core::entities::UserProfile;

use crate::{ApiClient, error::ApiError, http::check_response, http::decode_json};

#[derive(serde::Serialize)]
struct RegisterPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct AuthResponse {
    token: String,
    user: UserProfile,
}

impl ApiClient {
    /// Create an account and adopt the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API rejects the
    /// registration, or the token cannot be persisted.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ApiError> {
        let payload = RegisterPayload {
            name,
            email,
            password,
        };
        self.authenticate("/auth/register", &payload).await
    }

    /// Log in and adopt the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the credentials are
    /// rejected, or the token cannot be persisted.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let payload = LoginPayload { email, password };
        self.authenticate("/auth/login", &payload).await
    }

    /// Drop the session token and clear persisted credentials.
    ///
    /// Purely local: the server holds no session state worth revoking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] if the credentials file cannot be removed.
    pub fn logout(&mut self) -> Result<(), ApiError> {
        self.session_mut().clear()?;
        Ok(())
    }

    async fn authenticate<P: serde::Serialize>(
        &mut self,
        path: &str,
        payload: &P,
    ) -> Result<UserProfile, ApiError> {
        let resp = self.http.post(self.endpoint(path)).json(payload).send().await?;
        let resp = check_response(resp).await?;
        let data: AuthResponse = decode_json(resp, path).await?;

        self.session_mut().set_token(data.token)?;
        Ok(data.user)
    }
}
