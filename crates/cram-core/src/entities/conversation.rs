use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::ids;

/// One message in a per-note conversation.
///
/// Transcripts are ordered and append-only on the client. Role alternation is
/// not enforced; consecutive user messages are legal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    /// Build a locally-minted user message, timestamped now.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: ids::local_message_id(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Build a locally-minted assistant message, timestamped now.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: ids::local_message_id(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
