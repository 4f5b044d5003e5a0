use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `cram auth login`")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStoreError(String),
}
