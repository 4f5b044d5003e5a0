//! Quiz flow: setup, taking, and results phases over the quiz endpoints.

use cram_api::ApiClient;
use cram_core::entities::{Answer, GradedAnswer, Question, QuizReport};
use cram_core::enums::{Difficulty, QuestionKind, QuizPhase};

use crate::error::FlowError;

/// Default number of questions requested during setup.
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

/// Setup-phase choices for question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub count: u8,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            kind: QuestionKind::MultipleChoice,
            difficulty: Difficulty::Medium,
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Outcome of accepting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More questions remain; the flow advanced to the next one.
    Next,
    /// That was the last question; the flow is ready to submit.
    ReadyToSubmit,
}

/// State machine for one quiz session against a single note.
///
/// ```text
/// setup --generate--> taking --submit--> results --reset--> setup
/// ```
///
/// Failures keep the flow stable: a failed generation stays in `setup`, a
/// failed submission stays in `taking` with questions and answers intact.
/// There is exactly one active question set; `reset` is the only way out of
/// `results`.
#[derive(Debug)]
pub struct QuizFlow {
    note_id: String,
    phase: QuizPhase,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    current: usize,
    report: Option<QuizReport>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            phase: QuizPhase::Setup,
            questions: Vec::new(),
            answers: Vec::new(),
            current: 0,
            report: None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// The question awaiting an answer, if any remain.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == QuizPhase::Taking {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Zero-based index of the question awaiting an answer.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    /// Grading report, present once the flow reaches `results`.
    #[must_use]
    pub fn report(&self) -> Option<&QuizReport> {
        self.report.as_ref()
    }

    /// Generate a fresh question set and enter `taking`.
    ///
    /// On failure the phase stays `setup` and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Phase`] outside `setup`, [`FlowError::Api`] when
    /// generation fails, and [`FlowError::EmptyQuestionSet`] when the API
    /// returns zero questions.
    pub async fn generate(
        &mut self,
        client: &ApiClient,
        config: &QuizConfig,
    ) -> Result<(), FlowError> {
        if !self.phase.can_transition_to(QuizPhase::Taking) {
            return Err(FlowError::Phase {
                flow: "quiz",
                action: "generate questions",
                phase: self.phase.as_str(),
            });
        }
        let questions = client
            .generate_questions(&self.note_id, config.kind, config.difficulty, config.count)
            .await?;
        if questions.is_empty() {
            return Err(FlowError::EmptyQuestionSet);
        }

        self.questions = questions;
        self.answers.clear();
        self.current = 0;
        self.report = None;
        self.phase = QuizPhase::Taking;
        Ok(())
    }

    /// Accept a non-empty answer for the current question and advance.
    ///
    /// An empty answer is rejected with the flow unchanged. Accepting the
    /// answer for the last question yields [`Step::ReadyToSubmit`] instead of
    /// advancing.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Phase`] outside `taking`, [`FlowError::EmptyAnswer`]
    /// for blank input, and [`FlowError::AlreadyComplete`] once every question
    /// has an answer.
    pub fn answer_current(&mut self, text: &str) -> Result<Step, FlowError> {
        if self.phase != QuizPhase::Taking {
            return Err(FlowError::Phase {
                flow: "quiz",
                action: "answer a question",
                phase: self.phase.as_str(),
            });
        }
        let answer = text.trim();
        if answer.is_empty() {
            return Err(FlowError::EmptyAnswer);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(FlowError::AlreadyComplete);
        };

        self.answers.push(Answer {
            question_id: question.id.clone(),
            question: question.question.clone(),
            answer: answer.to_string(),
        });
        self.current += 1;
        if self.current < self.questions.len() {
            Ok(Step::Next)
        } else {
            Ok(Step::ReadyToSubmit)
        }
    }

    /// Submit the full answer sequence for grading and enter `results`.
    ///
    /// On failure the phase stays `taking` with questions and answers intact;
    /// the quiz is not lost.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Phase`] outside `taking`, [`FlowError::Unanswered`]
    /// while questions remain, and [`FlowError::Api`] when grading fails.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), FlowError> {
        if !self.phase.can_transition_to(QuizPhase::Results) {
            return Err(FlowError::Phase {
                flow: "quiz",
                action: "submit answers",
                phase: self.phase.as_str(),
            });
        }
        if !self.all_answered() {
            return Err(FlowError::Unanswered {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }

        let report = client.submit_answers(&self.note_id, &self.answers).await?;
        self.report = Some(report);
        self.phase = QuizPhase::Results;
        Ok(())
    }

    /// Graded verdicts in original question order, paired by question id.
    ///
    /// A question the report does not cover pairs with `None`.
    #[must_use]
    pub fn review(&self) -> Vec<(&Question, Option<&GradedAnswer>)> {
        self.questions
            .iter()
            .map(|question| {
                let graded = self
                    .report
                    .as_ref()
                    .and_then(|report| report.graded_for(&question.id));
                (question, graded)
            })
            .collect()
    }

    /// Discard everything and return to `setup`.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::Setup;
        self.questions.clear();
        self.answers.clear();
        self.current = 0;
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn question(id: &str, text: &str) -> Question {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "noteId": "n_1",
            "question": text,
            "type": "short_answer",
            "difficulty": "medium",
            "createdAt": "2025-11-04T09:00:00Z"
        }))
        .expect("question fixture")
    }

    fn taking_flow(questions: Vec<Question>) -> QuizFlow {
        let mut flow = QuizFlow::new("n_1");
        flow.questions = questions;
        flow.phase = QuizPhase::Taking;
        flow
    }

    #[test]
    fn new_flow_starts_in_setup() {
        let flow = QuizFlow::new("n_1");
        assert_eq!(flow.phase(), QuizPhase::Setup);
        assert!(flow.questions().is_empty());
        assert!(flow.current_question().is_none());
        assert!(flow.report().is_none());
    }

    #[test]
    fn empty_answer_is_rejected_with_state_unchanged() {
        let mut flow = taking_flow(vec![question("q_1", "First?")]);

        for blank in ["", "   ", "\t\n"] {
            let err = flow.answer_current(blank).unwrap_err();
            assert!(matches!(err, FlowError::EmptyAnswer));
            assert_eq!(flow.answers().len(), 0);
            assert_eq!(flow.current_index(), 0);
            assert_eq!(flow.phase(), QuizPhase::Taking);
        }
    }

    #[test]
    fn accepted_answers_accumulate_with_matching_question_text() {
        let mut flow = taking_flow(vec![
            question("q_1", "First?"),
            question("q_2", "Second?"),
            question("q_3", "Third?"),
        ]);

        assert_eq!(flow.answer_current("one").unwrap(), Step::Next);
        assert_eq!(flow.answer_current("two").unwrap(), Step::Next);
        assert_eq!(flow.answer_current("three").unwrap(), Step::ReadyToSubmit);

        assert_eq!(flow.answers().len(), 3);
        for (answer, expected) in flow.answers().iter().zip(["First?", "Second?", "Third?"]) {
            assert_eq!(answer.question, expected);
        }
        assert!(flow.all_answered());
        assert!(flow.current_question().is_none());
    }

    #[test]
    fn answers_carry_question_ids_in_order() {
        let mut flow = taking_flow(vec![question("q_a", "A?"), question("q_b", "B?")]);
        flow.answer_current("first").unwrap();
        flow.answer_current("second").unwrap();

        let ids: Vec<_> = flow.answers().iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, ["q_a", "q_b"]);
    }

    #[test]
    fn answering_past_the_end_is_rejected() {
        let mut flow = taking_flow(vec![question("q_1", "Only?")]);
        flow.answer_current("done").unwrap();

        let err = flow.answer_current("again").unwrap_err();
        assert!(matches!(err, FlowError::AlreadyComplete));
        assert_eq!(flow.answers().len(), 1);
    }

    #[test]
    fn answering_outside_taking_is_rejected() {
        let mut flow = QuizFlow::new("n_1");
        let err = flow.answer_current("hello").unwrap_err();
        assert!(matches!(err, FlowError::Phase { .. }));
    }

    #[test]
    fn five_question_run_accumulates_in_question_order() {
        let questions: Vec<_> = (0..5)
            .map(|i| question(&format!("q_{i}"), &format!("Question {i}?")))
            .collect();
        let mut flow = taking_flow(questions);

        for i in 0..5 {
            let step = flow.answer_current(&format!("answer {i}")).unwrap();
            if i < 4 {
                assert_eq!(step, Step::Next);
            } else {
                assert_eq!(step, Step::ReadyToSubmit);
            }
        }

        assert_eq!(flow.answers().len(), 5);
        let ids: Vec<_> = flow.answers().iter().map(|a| a.question_id.as_str()).collect();
        assert_eq!(ids, ["q_0", "q_1", "q_2", "q_3", "q_4"]);
    }

    #[test]
    fn review_pairs_by_id_in_question_order() {
        let mut flow = taking_flow(vec![question("q_1", "First?"), question("q_2", "Second?")]);
        flow.answer_current("one").unwrap();
        flow.answer_current("two").unwrap();

        // Report lists q_2 first and omits nothing; review must still follow
        // question order and pair by id.
        flow.report = Some(
            serde_json::from_value(serde_json::json!({
                "score": 50.0,
                "gradedAnswers": [
                    {"questionId": "q_2", "isCorrect": false},
                    {"questionId": "q_1", "isCorrect": true}
                ]
            }))
            .expect("report fixture"),
        );
        flow.phase = QuizPhase::Results;

        let review = flow.review();
        assert_eq!(review.len(), 2);
        assert_eq!(review[0].0.id, "q_1");
        assert!(review[0].1.expect("graded").is_correct);
        assert_eq!(review[1].0.id, "q_2");
        assert!(!review[1].1.expect("graded").is_correct);
    }

    #[test]
    fn review_leaves_uncovered_questions_ungraded() {
        let mut flow = taking_flow(vec![question("q_1", "First?"), question("q_2", "Second?")]);
        flow.report = Some(
            serde_json::from_value(serde_json::json!({
                "score": 50.0,
                "gradedAnswers": [{"questionId": "q_1", "isCorrect": true}]
            }))
            .expect("report fixture"),
        );

        let review = flow.review();
        assert!(review[0].1.is_some());
        assert!(review[1].1.is_none());
    }

    #[test]
    fn reset_returns_to_a_clean_setup() {
        let mut flow = taking_flow(vec![question("q_1", "First?")]);
        flow.answer_current("one").unwrap();
        flow.reset();

        assert_eq!(flow.phase(), QuizPhase::Setup);
        assert!(flow.questions().is_empty());
        assert!(flow.answers().is_empty());
        assert_eq!(flow.current_index(), 0);
        assert!(flow.report().is_none());
    }

    #[test]
    fn default_config_is_five_medium_multiple_choice() {
        let config = QuizConfig::default();
        assert_eq!(config.kind, QuestionKind::MultipleChoice);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.count, DEFAULT_QUESTION_COUNT);
    }
}
