//! # cram-flows
//!
//! Sequential flow state machines around the gateway client.
//!
//! Each flow keeps its state as plain data and exposes explicit transitions;
//! the async methods that talk to the Cram API take the `cram_api::ApiClient`
//! as a parameter rather than owning it. Failures always leave a flow in a
//! stable state: validation failures keep an upload `idle`, a failed ask
//! appends an apology, a failed submission keeps the quiz `taking`.

pub mod chat;
pub mod quiz;
pub mod upload;

mod error;

pub use chat::{ChatSession, SUGGESTED_QUESTIONS};
pub use error::FlowError;
pub use quiz::{DEFAULT_QUESTION_COUNT, QuizConfig, QuizFlow, Step};
pub use upload::UploadFlow;
