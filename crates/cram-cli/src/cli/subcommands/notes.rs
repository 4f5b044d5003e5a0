use clap::{Args, Subcommand};

/// Note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotesCommands {
    /// List uploaded notes.
    List,
    /// Get a note by ID.
    Get { id: String },
    /// Upload a document (pdf, docx, txt, md).
    Upload(NotesUploadArgs),
    /// Delete a note.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct NotesUploadArgs {
    /// Path of the file to upload.
    pub file: String,
}
