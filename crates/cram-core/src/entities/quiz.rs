use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, QuestionKind};

/// A generated quiz question. Server-generated, client-immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    #[serde(rename = "noteId")]
    pub note_id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub options: Option<Vec<String>>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One answer as submitted for grading.
///
/// Carries the explicit `questionId` so grading results can be correlated by
/// id; the question text rides along for the backend's grader prompt.
/// Submission order still matches question order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub question: String,
    pub answer: String,
}

/// Grading verdict for one submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GradedAnswer {
    pub question_id: String,
    pub is_correct: bool,
    pub user_answer: Option<String>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

/// Result of submitting a full answer set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizReport {
    pub score: f64,
    #[serde(rename = "gradedAnswers")]
    pub graded_answers: Vec<GradedAnswer>,
}

impl QuizReport {
    /// Look up the verdict for a question by id.
    ///
    /// Correlation is by explicit id, never by array position, so a backend
    /// that reorders its grading output cannot mis-attribute correctness.
    #[must_use]
    pub fn graded_for(&self, question_id: &str) -> Option<&GradedAnswer> {
        self.graded_answers
            .iter()
            .find(|graded| graded.question_id == question_id)
    }

    /// Count of correct answers in the report.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.graded_answers.iter().filter(|g| g.is_correct).count()
    }
}

/// A single graded question fetched for post-quiz review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GradedQuestion {
    pub id: String,
    pub note_id: Option<String>,
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: Option<String>,
    pub is_correct: bool,
    pub explanation: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
}
