//! Entity structs for all Cram domain objects.
//!
//! Each struct mirrors the Cram API wire format. The backend uses a mixed
//! field-name convention (`note_name` next to `uploadedAt`); serde renames
//! preserve it exactly, so the Rust side can stay snake_case throughout.

mod conversation;
mod note;
mod quiz;
mod user;

pub use conversation::ConversationMessage;
pub use note::Note;
pub use quiz::{Answer, GradedAnswer, GradedQuestion, Question, QuizReport};
pub use user::UserProfile;
