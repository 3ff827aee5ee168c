use thiserror::Error;

use super::question::{ANSWERS_PER_QUESTION, AnswerOption, Question, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error(
        "number of questions ({questions}), answer sets ({answer_sets}) and correct answers ({correct_answers}) is not equal"
    )]
    CountMismatch {
        questions: usize,
        answer_sets: usize,
        correct_answers: usize,
    },

    #[error("answer set {index} has fewer than {ANSWERS_PER_QUESTION} answers")]
    InsufficientAnswers { index: usize },

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Collects user-authored questions field by field.
///
/// Answers are grouped: every [`ANSWERS_PER_QUESTION`] calls to
/// [`set_answer`](Self::set_answer) start a new answer set.
#[derive(Debug, Clone, Default)]
pub struct QuestionsBuilder {
    questions: Vec<String>,
    answers: Vec<Vec<AnswerOption>>,
    correct_answers: Vec<String>,
}

impl QuestionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_question(&mut self, question: impl Into<String>) -> &mut Self {
        self.questions.push(question.into());
        self
    }

    /// Add an answer to the current set, starting a new set once the last is full.
    ///
    /// Repeating an answer text inside the same set only updates its percentage.
    pub fn set_answer(&mut self, answer: impl Into<String>, percent: u8) -> &mut Self {
        let answer = answer.into();
        match self.answers.last_mut() {
            Some(set) if set.len() < ANSWERS_PER_QUESTION => {
                if let Some(existing) = set.iter_mut().find(|a| a.text() == answer) {
                    *existing = AnswerOption::new(answer, percent);
                } else {
                    set.push(AnswerOption::new(answer, percent));
                }
            }
            _ => self.answers.push(vec![AnswerOption::new(answer, percent)]),
        }
        self
    }

    pub fn set_correct_answer(&mut self, answer: impl Into<String>) -> &mut Self {
        self.correct_answers.push(answer.into());
        self
    }

    pub fn clear(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.correct_answers.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.answers.is_empty() && self.correct_answers.is_empty()
    }

    /// Validate everything collected so far into questions.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::CountMismatch` when the three lists differ in length,
    /// `BuildError::InsufficientAnswers` for the first short answer set, and
    /// `BuildError::InvalidQuestion` when an entry fails question validation.
    pub fn build(&self) -> Result<Vec<Question>, BuildError> {
        if self.questions.len() != self.answers.len()
            || self.questions.len() != self.correct_answers.len()
        {
            return Err(BuildError::CountMismatch {
                questions: self.questions.len(),
                answer_sets: self.answers.len(),
                correct_answers: self.correct_answers.len(),
            });
        }

        if let Some(index) = self
            .answers
            .iter()
            .position(|set| set.len() < ANSWERS_PER_QUESTION)
        {
            return Err(BuildError::InsufficientAnswers { index });
        }

        self.questions
            .iter()
            .zip(&self.answers)
            .zip(&self.correct_answers)
            .enumerate()
            .map(|(index, ((text, answers), correct))| {
                Question::new(text.clone(), answers.iter().cloned(), correct.clone())
                    .map_err(|source| BuildError::InvalidQuestion { index, source })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_full(builder: &mut QuestionsBuilder, q: &str, correct: &str) {
        builder.set_question(q);
        for (text, p) in [("A", 10), ("B", 20), ("C", 30), ("D", 40)] {
            builder.set_answer(text, p);
        }
        builder.set_correct_answer(correct);
    }

    #[test]
    fn builds_questions_in_order() {
        let mut builder = QuestionsBuilder::new();
        push_full(&mut builder, "First?", "A");
        push_full(&mut builder, "Second?", "D");

        let questions = builder.build().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text(), "First?");
        assert_eq!(questions[1].correct_answer(), "D");
        assert_eq!(questions[1].percent_for("C"), Some(30));
    }

    #[test]
    fn short_answer_set_reports_its_index() {
        let mut builder = QuestionsBuilder::new();
        push_full(&mut builder, "First?", "A");
        builder.set_question("Second?");
        builder
            .set_answer("A", 30)
            .set_answer("B", 30)
            .set_answer("C", 40);
        builder.set_correct_answer("A");

        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::InsufficientAnswers { index: 1 }
        );
    }

    #[test]
    fn unequal_lists_are_a_count_mismatch() {
        let mut builder = QuestionsBuilder::new();
        push_full(&mut builder, "First?", "A");
        builder.set_question("Dangling?");

        assert!(matches!(
            builder.build().unwrap_err(),
            BuildError::CountMismatch {
                questions: 2,
                answer_sets: 1,
                correct_answers: 1
            }
        ));
    }

    #[test]
    fn repeated_answer_overwrites_percent() {
        let mut builder = QuestionsBuilder::new();
        builder.set_question("Q?");
        builder
            .set_answer("A", 5)
            .set_answer("A", 10)
            .set_answer("B", 20)
            .set_answer("C", 30)
            .set_answer("D", 40);
        builder.set_correct_answer("B");

        let questions = builder.build().unwrap();
        assert_eq!(questions[0].percent_for("A"), Some(10));
    }

    #[test]
    fn invalid_entry_is_reported_with_index() {
        let mut builder = QuestionsBuilder::new();
        push_full(&mut builder, "First?", "Z");

        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::InvalidQuestion {
                index: 0,
                source: QuestionError::MissingCorrectAnswer("Z".into())
            }
        );
    }

    #[test]
    fn clear_resets_state() {
        let mut builder = QuestionsBuilder::new();
        push_full(&mut builder, "First?", "A");
        builder.clear();
        assert!(builder.is_empty());
        assert!(builder.build().unwrap().is_empty());
    }
}
