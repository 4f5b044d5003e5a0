use clap::{Args, Subcommand};
use cram_flows::DEFAULT_QUESTION_COUNT;

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Generate a quiz from a note and take it interactively.
    Take(QuizTakeArgs),
    /// Look up one graded question by ID.
    Review { question_id: String },
}

#[derive(Clone, Debug, Args)]
pub struct QuizTakeArgs {
    /// Note to generate questions from.
    pub note_id: String,

    /// Question kind: multiple-choice, short-answer, essay.
    #[arg(long, default_value = "multiple-choice")]
    pub kind: String,

    /// Difficulty: easy, medium, hard.
    #[arg(long, default_value = "medium")]
    pub difficulty: String,

    /// Number of questions to generate.
    #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub count: u8,
}
