//! Pre-upload file validation.
//!
//! Both checks run locally, before any network call: a file that fails here
//! never produces an HTTP request. The backend re-validates on its side; this
//! layer only exists to fail fast.

use crate::errors::ValidationError;

/// Upload size cap: 20 MB.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TXT: &str = "text/plain";
pub const MIME_MD: &str = "text/markdown";

/// MIME types the backend accepts for document upload.
pub const ALLOWED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX, MIME_TXT, MIME_MD];

/// Map a filename extension to its upload MIME type.
#[must_use]
pub fn mime_for_extension(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(MIME_PDF),
        "docx" => Some(MIME_DOCX),
        "txt" => Some(MIME_TXT),
        "md" | "markdown" => Some(MIME_MD),
        _ => None,
    }
}

/// Validate a candidate upload against the size cap and MIME allow-list.
///
/// # Errors
///
/// Returns [`ValidationError`] when the file is above [`MAX_UPLOAD_BYTES`] or
/// its MIME type is not in [`ALLOWED_MIME_TYPES`].
pub fn validate_upload(size: u64, mime: &str) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(ValidationError::UnsupportedType {
            mime: mime.to_string(),
        });
    }
    Ok(())
}
