//! Per-note question answering and conversation history.

use cram_core::entities::ConversationMessage;

use crate::{ApiClient, error::ApiError, http::check_response, http::decode_json};

#[derive(serde::Serialize)]
struct AskPayload<'a> {
    question: &'a str,
}

#[derive(serde::Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(serde::Deserialize)]
struct ConversationResponse {
    messages: Vec<ConversationMessage>,
}

impl ApiClient {
    /// Ask a question about one note's content.
    ///
    /// One question per call; the server grounds its answer in the note's
    /// extracted text and appends the exchange to the stored conversation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn ask(&self, note_id: &str, question: &str) -> Result<String, ApiError> {
        let path = format!("/notes/{}/ask", urlencoding::encode(note_id));
        let payload = AskPayload { question };

        let resp = self
            .authorize(self.http.post(self.endpoint(&path)))
            .json(&payload)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: AskResponse = decode_json(resp, &path).await?;
        Ok(data.answer)
    }

    /// Fetch the stored conversation history for a note.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded. Callers opening a chat treat any failure here as an empty
    /// history.
    pub async fn conversation(
        &self,
        note_id: &str,
    ) -> Result<Vec<ConversationMessage>, ApiError> {
        let path = format!("/notes/{}/conversations", urlencoding::encode(note_id));
        let resp = self
            .authorize(self.http.get(self.endpoint(&path)))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: ConversationResponse = decode_json(resp, &path).await?;
        Ok(data.messages)
    }
}
