use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::settings::Difficulty;

/// Result of one finished game, as shown on the score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    recorded_at: DateTime<Utc>,
    score: u32,
    coins: u32,
    hints_used: u8,
    difficulty: Difficulty,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(
        recorded_at: DateTime<Utc>,
        score: u32,
        coins: u32,
        hints_used: u8,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            recorded_at,
            score,
            coins,
            hints_used,
            difficulty,
        }
    }

    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Percentage of the game answered correctly.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
