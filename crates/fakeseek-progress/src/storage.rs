//! The storage port behind the progress tracker.
//!
//! The tracker never talks to a browser API directly; it reads and
//! writes string keys through [`ProgressStorage`]. The web app
//! provides a localStorage-backed implementation, native tests and
//! the CLI use [`MemoryStorage`].

use std::collections::BTreeMap;

/// Storage key for the safety score (decimal string).
pub const SCORE_KEY: &str = "digitalSafetyScore";
/// Storage key for completed module names (JSON string array).
pub const MODULES_KEY: &str = "completedModules";
/// Storage key for the most recent activity tag (plain string).
pub const ACTIVITY_KEY: &str = "lastActivity";

/// Errors surfaced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend rejected the operation (quota, availability, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value persistence for progress state.
pub trait ProgressStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] if the write fails.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`ProgressStorage`] for tests and native runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries.
    #[must_use]
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load(SCORE_KEY).unwrap(), None);
        storage.save(SCORE_KEY, "42").unwrap();
        assert_eq!(storage.load(SCORE_KEY).unwrap(), Some("42".to_owned()));
        storage.save(SCORE_KEY, "7").unwrap();
        assert_eq!(storage.load(SCORE_KEY).unwrap(), Some("7".to_owned()));
    }

    #[test]
    fn seeded_storage_exposes_entries() {
        let storage = MemoryStorage::with_entries([(SCORE_KEY.to_owned(), "88".to_owned())]);
        assert_eq!(storage.load(SCORE_KEY).unwrap(), Some("88".to_owned()));
    }
}
