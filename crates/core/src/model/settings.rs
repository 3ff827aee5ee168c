use serde::{Deserialize, Serialize};

/// Which built-in question bank a game draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// How the selected questions are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionOrder {
    #[default]
    Serial,
    Random,
}

/// Player preferences that persist across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub order: QuestionOrder,
}

impl GameSettings {
    #[must_use]
    pub fn new(difficulty: Difficulty, order: QuestionOrder) -> Self {
        Self { difficulty, order }
    }
}
