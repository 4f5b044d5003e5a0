use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, NotesCommands, QuizCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Uploaded notes.
    Notes {
        #[command(subcommand)]
        action: NotesCommands,
    },
    /// Chat about one note (REPL unless --ask is given).
    Chat(ChatArgs),
    /// Quizzes generated from a note.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
}

/// Arguments for `cram chat`.
#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Note to chat about.
    pub note_id: String,

    /// Ask a single question and print the answer instead of starting the REPL.
    #[arg(long)]
    pub ask: Option<String>,
}
