//! Chat flow: a per-note linear transcript over the ask endpoint.

use cram_api::ApiClient;
use cram_core::entities::{ConversationMessage, Note};

use crate::error::FlowError;

/// Shortcut prompts offered alongside the transcript.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Summarize the key points of this note",
    "What are the main topics covered?",
    "Explain the hardest concept in simple terms",
    "What should I review before an exam?",
];

/// Transcript text appended when the ask call fails.
const APOLOGY: &str = "Sorry, I ran into an error answering that. Please try again.";

/// A per-note chat transcript.
///
/// The transcript is linear and append-only. One question is in flight at a
/// time, enforced structurally: [`ChatSession::send`] takes `&mut self` and
/// suspends until the exchange is settled. There is no editing and no
/// cancellation.
#[derive(Debug)]
pub struct ChatSession {
    note_id: String,
    messages: Vec<ConversationMessage>,
}

impl ChatSession {
    /// Open a chat for a note, loading any stored conversation history.
    ///
    /// A failed history fetch is soft: the chat starts fresh. The synthetic
    /// welcome message is seeded only when the loaded history is empty, so
    /// reopening an existing conversation never duplicates it.
    pub async fn open(client: &ApiClient, note: &Note) -> Self {
        let history = client.conversation(&note.id).await.unwrap_or_else(|error| {
            tracing::debug!(note_id = %note.id, %error, "no stored conversation, starting fresh");
            Vec::new()
        });
        Self::from_history(note, history)
    }

    /// Build a session from an already-loaded history.
    #[must_use]
    pub fn from_history(note: &Note, history: Vec<ConversationMessage>) -> Self {
        let messages = if history.is_empty() {
            vec![ConversationMessage::assistant(welcome_text(note))]
        } else {
            history
        };
        Self {
            note_id: note.id.clone(),
            messages,
        }
    }

    #[must_use]
    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    #[must_use]
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Send one question and wait for the reply.
    ///
    /// The user message is appended before the request goes out. On success
    /// the assistant reply is appended and returned; on failure a synthetic
    /// apology is appended instead and the error comes back to the caller for
    /// notification. Either way the transcript grows by exactly two messages.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Api`] when the ask call fails.
    pub async fn send(&mut self, client: &ApiClient, text: &str) -> Result<String, FlowError> {
        self.messages.push(ConversationMessage::user(text));
        match client.ask(&self.note_id, text).await {
            Ok(answer) => {
                self.messages.push(ConversationMessage::assistant(&answer));
                Ok(answer)
            }
            Err(error) => {
                self.messages.push(ConversationMessage::assistant(APOLOGY));
                Err(error.into())
            }
        }
    }
}

fn welcome_text(note: &Note) -> String {
    format!(
        "Hi! I've read \"{}\". Ask me anything about it, or start from a suggested question.",
        note.display_title()
    )
}
