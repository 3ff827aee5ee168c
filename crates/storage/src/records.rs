use serde::{Deserialize, Serialize};

use millionaire_core::model::{AnswerOption, Question, QuestionError};

/// Persisted shape of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub text: String,
    pub percent: u8,
}

/// Persisted shape for a user-authored question.
///
/// Kept separate from the domain `Question` so that stored data goes back
/// through validation when it is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub answers: Vec<AnswerRecord>,
    pub correct_answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            text: question.text().to_owned(),
            answers: question
                .answers()
                .iter()
                .map(|a| AnswerRecord {
                    text: a.text().to_owned(),
                    percent: a.percent(),
                })
                .collect(),
            correct_answer: question.correct_answer().to_owned(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the stored data no longer forms a valid question.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let answers = self
            .answers
            .into_iter()
            .map(|a| AnswerOption::new(a.text, a.percent));
        Question::new(self.text, answers, self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_validation() {
        let question = Question::new(
            "Capital of France?",
            [
                AnswerOption::new("Paris", 70),
                AnswerOption::new("Lyon", 10),
                AnswerOption::new("Nice", 10),
                AnswerOption::new("Lille", 10),
            ],
            "Paris",
        )
        .unwrap();

        let record = QuestionRecord::from_question(&question);
        assert_eq!(record.answers[0].text, "Paris");
        assert_eq!(record.into_question().unwrap(), question);
    }

    #[test]
    fn tampered_record_is_rejected() {
        let record = QuestionRecord {
            text: "Q".into(),
            answers: vec![AnswerRecord {
                text: "A".into(),
                percent: 100,
            }],
            correct_answer: "A".into(),
        };
        assert_eq!(
            record.into_question().unwrap_err(),
            QuestionError::AnswerCount { count: 1 }
        );
    }
}
