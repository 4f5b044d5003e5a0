//! Core error types.
//!
//! Only local validation lives here. Domain-specific errors (`AuthError`,
//! `ConfigError`, `ApiError`, `FlowError`) live in their respective crates;
//! the CLI converges everything into `anyhow`.

use thiserror::Error;

/// Local pre-upload validation failures. These never reach the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// File exceeds the upload size cap.
    #[error("file is {size} bytes, above the {limit} byte upload limit")]
    TooLarge { size: u64, limit: u64 },

    /// MIME type is outside the allow-list.
    #[error("unsupported file type '{mime}' — only PDF, DOCX, TXT, and MD are accepted")]
    UnsupportedType { mime: String },

    /// File extension maps to no known MIME type.
    #[error("cannot determine file type of '{filename}' — only PDF, DOCX, TXT, and MD are accepted")]
    UnknownExtension { filename: String },
}
