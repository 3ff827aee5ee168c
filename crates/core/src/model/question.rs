use std::collections::HashSet;

use thiserror::Error;

/// Every question offers exactly this many answers.
pub const ANSWERS_PER_QUESTION: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {ANSWERS_PER_QUESTION} answers, got {count}")]
    AnswerCount { count: usize },

    #[error("answer text cannot be empty")]
    EmptyAnswer,

    #[error("duplicate answer: {0}")]
    DuplicateAnswer(String),

    #[error("correct answer {0:?} is not one of the answers")]
    MissingCorrectAnswer(String),

    #[error("audience percentages must sum to 100, got {sum}")]
    PercentSum { sum: u32 },
}

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// One presented answer and the share of the audience that votes for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    text: String,
    percent: u8,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: impl Into<String>, percent: u8) -> Self {
        Self {
            text: text.into(),
            percent,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Answers keep the order they were given in; that order is the order the
/// answers are presented and the order hints index into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<AnswerOption>,
    correct_answer: String,
}

impl Question {
    /// Build a question from its text, four answers and the correct answer text.
    ///
    /// Text is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is empty, the answer count is not four,
    /// answers are blank or repeated, the correct answer is not among the answers,
    /// or the audience percentages do not add up to 100.
    pub fn new(
        text: impl Into<String>,
        answers: impl IntoIterator<Item = AnswerOption>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let answers: Vec<AnswerOption> = answers
            .into_iter()
            .map(|a| AnswerOption::new(a.text.trim(), a.percent))
            .collect();
        if answers.len() != ANSWERS_PER_QUESTION {
            return Err(QuestionError::AnswerCount {
                count: answers.len(),
            });
        }

        let mut seen = HashSet::with_capacity(answers.len());
        for answer in &answers {
            if answer.text.is_empty() {
                return Err(QuestionError::EmptyAnswer);
            }
            if !seen.insert(answer.text.as_str()) {
                return Err(QuestionError::DuplicateAnswer(answer.text.clone()));
            }
        }

        let correct_answer = correct_answer.into().trim().to_owned();
        if !seen.contains(correct_answer.as_str()) {
            return Err(QuestionError::MissingCorrectAnswer(correct_answer));
        }

        let sum: u32 = answers.iter().map(|a| u32::from(a.percent)).sum();
        if sum != 100 {
            return Err(QuestionError::PercentSum { sum });
        }

        Ok(Self {
            text,
            answers,
            correct_answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerOption] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Answer text at a presentation index.
    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(AnswerOption::text)
    }

    /// Audience percentage for an answer, if the answer exists.
    #[must_use]
    pub fn percent_for(&self, answer: &str) -> Option<u8> {
        self.answers
            .iter()
            .find(|a| a.text == answer)
            .map(AnswerOption::percent)
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer.trim()
    }

    /// Answers other than the correct one, in presentation order.
    pub fn incorrect_answers(&self) -> impl Iterator<Item = &str> {
        self.answers
            .iter()
            .map(AnswerOption::text)
            .filter(move |text| *text != self.correct_answer)
    }
}
