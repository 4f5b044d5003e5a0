//! Note endpoints: upload, list, fetch, delete.

use cram_core::entities::Note;

use crate::{ApiClient, error::ApiError, http::check_response, http::decode_json};

#[derive(serde::Deserialize)]
struct NotesResponse {
    notes: Vec<Note>,
}

impl ApiClient {
    /// Upload a document as a single multipart `file` part.
    ///
    /// The server extracts text, summarizes, and returns the processed note.
    /// Size and MIME validation belongs to the caller and must happen before
    /// this request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API rejects the file,
    /// or the response cannot be decoded.
    pub async fn upload_note(
        &self,
        filename: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Note, ApiError> {
        let path = "/notes/upload";
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .authorize(self.http.post(self.endpoint(path)))
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        decode_json(resp, path).await
    }

    /// List all notes belonging to the session user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn notes(&self) -> Result<Vec<Note>, ApiError> {
        let path = "/notes";
        let resp = self
            .authorize(self.http.get(self.endpoint(path)))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: NotesResponse = decode_json(resp, path).await?;
        Ok(data.notes)
    }

    /// Fetch a single note by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the note does not exist,
    /// or the response cannot be decoded.
    pub async fn note(&self, id: &str) -> Result<Note, ApiError> {
        let path = format!("/notes/{}", urlencoding::encode(id));
        let resp = self
            .authorize(self.http.get(self.endpoint(&path)))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        decode_json(resp, &path).await
    }

    /// Delete a note and everything derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the API refuses the
    /// deletion.
    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/notes/{}", urlencoding::encode(id));
        let resp = self
            .authorize(self.http.delete(self.endpoint(&path)))
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
