#![forbid(unsafe_code)]

pub mod records;
pub mod repository;
pub mod sqlite;
pub mod stores;

pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
pub use stores::{ScoreHistoryStore, SettingsStore, UserQuestionStore};
