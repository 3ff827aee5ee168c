use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String blobs addressed by key.
///
/// The typed stores in [`crate::stores`] encode their values on top of this,
/// so a backend only has to move opaque text around.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Typed stores sharing one key-value backend.
#[derive(Clone)]
pub struct Storage {
    pub scores: crate::stores::ScoreHistoryStore,
    pub settings: crate::stores::SettingsStore,
    pub questions: crate::stores::UserQuestionStore,
}

impl Storage {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            scores: crate::stores::ScoreHistoryStore::new(Arc::clone(&backend)),
            settings: crate::stores::SettingsStore::new(Arc::clone(&backend)),
            questions: crate::stores::UserQuestionStore::new(backend),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_set_get_remove() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("scores").await.unwrap(), None);

        repo.set("scores", "[]").await.unwrap();
        assert_eq!(repo.get("scores").await.unwrap().as_deref(), Some("[]"));

        repo.set("scores", "[1]").await.unwrap();
        assert_eq!(repo.get("scores").await.unwrap().as_deref(), Some("[1]"));

        repo.remove("scores").await.unwrap();
        repo.remove("scores").await.unwrap();
        assert_eq!(repo.get("scores").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
