//! Quiz endpoints: question generation, answer submission, graded review.

use cram_core::entities::{Answer, GradedQuestion, Question, QuizReport};
use cram_core::enums::{Difficulty, QuestionKind};

use crate::{ApiClient, error::ApiError, http::check_response, http::decode_json};

#[derive(serde::Serialize)]
struct GeneratePayload {
    #[serde(rename = "type")]
    kind: QuestionKind,
    difficulty: Difficulty,
    count: u8,
}

#[derive(serde::Deserialize)]
struct QuestionsResponse {
    questions: Vec<Question>,
}

#[derive(serde::Serialize)]
struct SubmitPayload<'a> {
    answers: &'a [Answer],
}

impl ApiClient {
    /// Generate a fresh question set from one note's content.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn generate_questions(
        &self,
        note_id: &str,
        kind: QuestionKind,
        difficulty: Difficulty,
        count: u8,
    ) -> Result<Vec<Question>, ApiError> {
        let path = format!("/notes/{}/questions", urlencoding::encode(note_id));
        let payload = GeneratePayload {
            kind,
            difficulty,
            count,
        };

        let resp = self
            .authorize(self.http.post(self.endpoint(&path)))
            .json(&payload)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: QuestionsResponse = decode_json(resp, &path).await?;
        Ok(data.questions)
    }

    /// Submit the full ordered answer sequence for grading.
    ///
    /// The array order matches the question order; each answer also carries
    /// its `questionId` so grading never depends on position alone.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn submit_answers(
        &self,
        note_id: &str,
        answers: &[Answer],
    ) -> Result<QuizReport, ApiError> {
        let path = format!("/notes/{}/questions/submit", urlencoding::encode(note_id));
        let payload = SubmitPayload { answers };

        let resp = self
            .authorize(self.http.post(self.endpoint(&path)))
            .json(&payload)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        decode_json(resp, &path).await
    }

    /// Fetch one graded question for post-quiz review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the question does not
    /// exist, or the response cannot be decoded.
    pub async fn graded_question(&self, id: &str) -> Result<GradedQuestion, ApiError> {
        let path = format!("/questions/{}", urlencoding::encode(id));
        let resp = self
            .authorize(self.http.get(self.endpoint(&path)))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        decode_json(resp, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const QUESTIONS_FIXTURE: &str = r#"{
        "questions": [
            {
                "id": "q_01",
                "noteId": "n_01",
                "question": "Which organelle produces ATP?",
                "type": "multiple_choice",
                "difficulty": "easy",
                "options": ["Nucleus", "Mitochondrion", "Ribosome", "Golgi"],
                "correctAnswer": "Mitochondrion",
                "createdAt": "2025-11-02T11:00:00Z"
            },
            {
                "id": "q_02",
                "noteId": "n_01",
                "question": "Explain membrane transport.",
                "type": "essay",
                "difficulty": "hard",
                "createdAt": "2025-11-02T11:00:01Z"
            }
        ]
    }"#;

    #[test]
    fn parse_questions_response() {
        let data: QuestionsResponse = serde_json::from_str(QUESTIONS_FIXTURE).unwrap();
        assert_eq!(data.questions.len(), 2);

        let first = &data.questions[0];
        assert_eq!(first.id, "q_01");
        assert_eq!(first.kind, QuestionKind::MultipleChoice);
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert_eq!(first.options.as_ref().map(Vec::len), Some(4));
        assert_eq!(first.correct_answer.as_deref(), Some("Mitochondrion"));

        let second = &data.questions[1];
        assert_eq!(second.kind, QuestionKind::Essay);
        assert!(second.options.is_none());
    }

    #[test]
    fn generate_payload_uses_wire_field_names() {
        let payload = GeneratePayload {
            kind: QuestionKind::MultipleChoice,
            difficulty: Difficulty::Medium,
            count: 5,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "multiple_choice",
                "difficulty": "medium",
                "count": 5
            })
        );
    }

    #[test]
    fn submit_payload_preserves_order_and_ids() {
        let answers = vec![
            Answer {
                question_id: "q_01".into(),
                question: "Which organelle produces ATP?".into(),
                answer: "Mitochondrion".into(),
            },
            Answer {
                question_id: "q_02".into(),
                question: "Explain membrane transport.".into(),
                answer: "Passive and active transport across the membrane.".into(),
            },
        ];
        let payload = SubmitPayload { answers: &answers };
        let json = serde_json::to_value(&payload).unwrap();

        let sent = json["answers"].as_array().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0]["questionId"], "q_01");
        assert_eq!(sent[1]["questionId"], "q_02");
    }
}
