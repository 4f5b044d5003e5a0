use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded document after server-side processing.
///
/// Server-owned: the client only ever reads, deletes, or creates these via
/// upload. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub note_name: String,
    pub title: Option<String>,
    pub filename: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(rename = "fileSize")]
    pub file_size: Option<u64>,
    #[serde(rename = "fileType")]
    pub file_type: Option<String>,
}

impl Note {
    /// Best display name: `title` when present and non-empty, else `note_name`.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.note_name)
    }
}
