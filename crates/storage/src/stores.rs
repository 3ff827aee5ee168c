//! Typed stores for score history, settings and user questions.
//!
//! Values are JSON-encoded into the key-value backend. `restore` never fails:
//! missing, unreadable or malformed values fall back to defaults and are logged.
//! Read-modify-write operations use `try_restore`, which still treats malformed
//! values as absent but returns backend read errors, so a failed read never
//! overwrites stored data.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use millionaire_core::model::{Difficulty, GameSettings, Question, QuestionOrder, ScoreRecord};

use crate::records::QuestionRecord;
use crate::repository::{KeyValueRepository, StorageError};

pub const SCORES_KEY: &str = "scores";
pub const DIFFICULTY_KEY: &str = "settings.level";
pub const QUESTION_ORDER_KEY: &str = "settings.order";
pub const QUESTIONS_KEY: &str = "questions";

async fn try_restore_json<T: DeserializeOwned>(
    backend: &dyn KeyValueRepository,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = backend.get(key).await? else {
        debug!(key, "no stored value, using default");
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(key, error = %err, "failed to decode stored value, using default");
            Ok(None)
        }
    }
}

async fn restore_json<T: DeserializeOwned>(
    backend: &dyn KeyValueRepository,
    key: &str,
) -> Option<T> {
    try_restore_json(backend, key).await.unwrap_or_else(|err| {
        warn!(key, error = %err, "failed to read stored value, using default");
        None
    })
}

async fn save_json<T: Serialize + ?Sized>(
    backend: &dyn KeyValueRepository,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    backend.set(key, &raw).await
}

//
// ─── SCORES ────────────────────────────────────────────────────────────────────
//

/// Score table, newest record first.
#[derive(Clone)]
pub struct ScoreHistoryStore {
    backend: Arc<dyn KeyValueRepository>,
}

impl ScoreHistoryStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueRepository>) -> Self {
        Self { backend }
    }

    pub async fn restore(&self) -> Vec<ScoreRecord> {
        restore_json(self.backend.as_ref(), SCORES_KEY)
            .await
            .unwrap_or_default()
    }

    /// Like [`restore`](Self::restore), but a backend read error is returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn try_restore(&self) -> Result<Vec<ScoreRecord>, StorageError> {
        Ok(try_restore_json(self.backend.as_ref(), SCORES_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Replace the stored history.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be encoded or written.
    pub async fn save(&self, scores: &[ScoreRecord]) -> Result<(), StorageError> {
        save_json(self.backend.as_ref(), SCORES_KEY, scores).await
    }

    /// Put `record` at the top of the history and persist it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored history cannot be read or the
    /// updated history cannot be written.
    pub async fn prepend(&self, record: ScoreRecord) -> Result<Vec<ScoreRecord>, StorageError> {
        let mut scores = self.try_restore().await?;
        scores.insert(0, record);
        self.save(&scores).await?;
        Ok(scores)
    }

    /// Empty the score table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the empty history cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.save(&[]).await
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct SettingsStore {
    backend: Arc<dyn KeyValueRepository>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueRepository>) -> Self {
        Self { backend }
    }

    pub async fn restore(&self) -> GameSettings {
        GameSettings::new(self.restore_difficulty().await, self.restore_order().await)
    }

    pub async fn restore_difficulty(&self) -> Difficulty {
        restore_json(self.backend.as_ref(), DIFFICULTY_KEY)
            .await
            .unwrap_or_default()
    }

    pub async fn restore_order(&self) -> QuestionOrder {
        restore_json(self.backend.as_ref(), QUESTION_ORDER_KEY)
            .await
            .unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    pub async fn save_difficulty(&self, difficulty: Difficulty) -> Result<(), StorageError> {
        save_json(self.backend.as_ref(), DIFFICULTY_KEY, &difficulty).await
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    pub async fn save_order(&self, order: QuestionOrder) -> Result<(), StorageError> {
        save_json(self.backend.as_ref(), QUESTION_ORDER_KEY, &order).await
    }
}

//
// ─── USER QUESTIONS ────────────────────────────────────────────────────────────
//

/// Questions the player wrote themselves.
#[derive(Clone)]
pub struct UserQuestionStore {
    backend: Arc<dyn KeyValueRepository>,
}

impl UserQuestionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueRepository>) -> Self {
        Self { backend }
    }

    /// Restore stored questions, skipping entries that no longer validate.
    pub async fn restore(&self) -> Vec<Question> {
        let records: Vec<QuestionRecord> = restore_json(self.backend.as_ref(), QUESTIONS_KEY)
            .await
            .unwrap_or_default();
        valid_questions(records)
    }

    /// Like [`restore`](Self::restore), but a backend read error is returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    pub async fn try_restore(&self) -> Result<Vec<Question>, StorageError> {
        Ok(valid_questions(self.try_restore_records().await?))
    }

    async fn try_restore_records(&self) -> Result<Vec<QuestionRecord>, StorageError> {
        Ok(try_restore_json(self.backend.as_ref(), QUESTIONS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Replace the stored questions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the questions cannot be encoded or written.
    pub async fn save(&self, questions: &[Question]) -> Result<(), StorageError> {
        let records: Vec<QuestionRecord> =
            questions.iter().map(QuestionRecord::from_question).collect();
        save_json(self.backend.as_ref(), QUESTIONS_KEY, &records).await
    }

    /// Add questions after the stored ones and persist the result.
    ///
    /// Stored entries that no longer validate are kept as they are; only the
    /// valid questions are returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored list cannot be read or the updated
    /// list cannot be written.
    pub async fn append(
        &self,
        questions: impl IntoIterator<Item = Question>,
    ) -> Result<Vec<Question>, StorageError> {
        let mut records = self.try_restore_records().await?;
        records.extend(questions.into_iter().map(|q| QuestionRecord::from_question(&q)));
        save_json(self.backend.as_ref(), QUESTIONS_KEY, &records).await?;
        Ok(valid_questions(records))
    }
}

fn valid_questions(records: Vec<QuestionRecord>) -> Vec<Question> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match record.into_question() {
            Ok(question) => Some(question),
            Err(err) => {
                warn!(index, error = %err, "skipping invalid stored question");
                None
            }
        })
        .collect()
}
