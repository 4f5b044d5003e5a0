//! Flow error types.

use thiserror::Error;

/// Errors raised by the upload, chat, and quiz flows.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Local file validation failed before any network call.
    #[error(transparent)]
    Validation(#[from] cram_core::errors::ValidationError),

    /// The gateway call failed. Flow state is left stable: chat keeps its
    /// transcript, the quiz keeps its questions and answers.
    #[error(transparent)]
    Api(#[from] cram_api::ApiError),

    /// An operation was invoked in a phase that does not allow it.
    #[error("cannot {action} while the {flow} flow is {phase}")]
    Phase {
        flow: &'static str,
        action: &'static str,
        phase: &'static str,
    },

    /// Quiz answers must be non-empty.
    #[error("answer cannot be empty")]
    EmptyAnswer,

    /// Every question already has an accepted answer.
    #[error("every question already has an answer — submit or reset")]
    AlreadyComplete,

    /// Submission requires an answer for every question.
    #[error("{answered} of {total} questions answered — finish the quiz before submitting")]
    Unanswered { answered: usize, total: usize },

    /// The API generated an empty question set.
    #[error("the API returned no questions")]
    EmptyQuestionSet,
}
