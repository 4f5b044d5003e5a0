//! # cram-auth
//!
//! Token storage and session context for the Cram CLI.
//!
//! Provides OS keychain token storage (`keyring`) with env var and file
//! fallbacks, and a [`Session`] that carries the resolved bearer token
//! through the API client. Authentication state is explicit: nothing in this
//! crate reads or writes a process-global token.

pub mod error;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::Session;
pub use token_store::{TokenSource, TokenStore};
