pub mod auth;
pub mod notes;
pub mod quiz;

pub use auth::AuthCommands;
pub use notes::NotesCommands;
pub use quiz::QuizCommands;
