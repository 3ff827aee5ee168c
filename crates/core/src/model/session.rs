use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Difficulty, Hint, ScoreRecord};
use crate::prize::{self, MAX_QUESTIONS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a game needs between 1 and {MAX_QUESTIONS} questions, got {count}")]
    InvalidQuestionCount { count: usize },

    #[error("all {total} questions are already answered")]
    AllAnswered { total: u32 },
}

/// Counters for one playthrough.
///
/// Created when a game starts and consumed by [`finalize`](Self::finalize),
/// so a finished game cannot be scored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    total_questions: u32,
    correct_answers: u32,
    coins: u32,
    score: u32,
    hints: Vec<Hint>,
}

impl GameSession {
    /// Start a session over `total_questions` questions with every hint available.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidQuestionCount` for zero questions or more
    /// questions than the prize ladder pays for.
    pub fn new(total_questions: usize) -> Result<Self, SessionError> {
        let total = u32::try_from(total_questions)
            .ok()
            .filter(|total| (1..=MAX_QUESTIONS).contains(total))
            .ok_or(SessionError::InvalidQuestionCount {
                count: total_questions,
            })?;

        Ok(Self {
            total_questions: total,
            correct_answers: 0,
            coins: 0,
            score: 0,
            hints: Hint::ALL.to_vec(),
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Coins for the highest prize tier reached so far.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn available_hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub fn is_hint_available(&self, hint: Hint) -> bool {
        self.hints.contains(&hint)
    }

    #[must_use]
    pub fn hints_used(&self) -> u8 {
        let used = Hint::ALL.len().saturating_sub(self.hints.len());
        u8::try_from(used).unwrap_or(u8::MAX)
    }

    /// Count one more correct answer and move up the prize ladder.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AllAnswered` once every question has been answered.
    pub fn record_correct_answer(&mut self) -> Result<(), SessionError> {
        let correct = self.correct_answers + 1;
        let coins = prize::prize_for(correct)
            .filter(|_| correct <= self.total_questions)
            .ok_or(SessionError::AllAnswered {
                total: self.total_questions,
            })?;

        self.correct_answers = correct;
        self.coins = coins;
        self.score = prize::score_percentage(self.total_questions, correct);
        Ok(())
    }

    /// Mark a hint as used. Returns `false` if it was already used.
    pub fn use_hint(&mut self, hint: Hint) -> bool {
        match self.hints.iter().position(|h| *h == hint) {
            Some(index) => {
                self.hints.remove(index);
                true
            }
            None => false,
        }
    }

    /// End the game and produce its score record.
    ///
    /// A loss keeps the prize of the last tier reached, but only from the third
    /// correct answer on; below that the player leaves with nothing.
    #[must_use]
    pub fn finalize(self, loss: bool, difficulty: Difficulty, at: DateTime<Utc>) -> ScoreRecord {
        let coins = if loss {
            prize::fallback_prize(self.correct_answers)
        } else {
            self.coins
        };

        ScoreRecord::new(at, self.score, coins, self.hints_used(), difficulty)
    }
}
