// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persistent Storage Module
//!
//! Local persistence for the little state the engine owns itself: the set
//! of favorite contact ids and the recent search queries. Contact data
//! stays in the platform store.

mod error;
mod favorites;
mod history;
pub mod migration;

pub use error::StorageError;
pub use history::SearchHistoryItem;

use std::collections::HashSet;
use std::path::Path;

use parking_lot::Mutex;
use rusqlite::Connection;

/// Key-set persistence for favorite contact ids.
pub trait FavoriteStore: Send {
    fn favorite_ids(&self) -> Result<HashSet<String>, StorageError>;
    fn save_favorite_ids(&self, ids: &HashSet<String>) -> Result<(), StorageError>;
}

/// Persistence for recent search queries, most recent first.
pub trait SearchHistoryStore: Send {
    fn search_history(&self) -> Result<Vec<SearchHistoryItem>, StorageError>;

    /// Records a query, keeping at most `limit` entries.
    fn record_search(&self, query: &str, timestamp: u64, limit: usize)
        -> Result<(), StorageError>;

    fn clear_search_history(&self) -> Result<(), StorageError>;
}

/// SQLite-based storage implementation.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens or creates a storage database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Creates an in-memory storage (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage { conn };
        storage.run_migrations()?;
        Ok(storage)
    }

    /// Runs all pending schema migrations.
    fn run_migrations(&self) -> Result<(), StorageError> {
        let migrations = migration::all_migrations();
        migration::MigrationRunner::run(&self.conn, &migrations)
    }

    /// Returns the current schema version.
    pub fn schema_version(&self) -> Result<u32, StorageError> {
        migration::MigrationRunner::current_version(&self.conn)
    }
}

/// Volatile store for tests and embedders without a database.
#[derive(Default)]
pub struct MemoryStore {
    favorites: Mutex<HashSet<String>>,
    history: Mutex<Vec<SearchHistoryItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_favorites<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        *store.favorites.lock() = ids.into_iter().map(Into::into).collect();
        store
    }
}

impl FavoriteStore for MemoryStore {
    fn favorite_ids(&self) -> Result<HashSet<String>, StorageError> {
        Ok(self.favorites.lock().clone())
    }

    fn save_favorite_ids(&self, ids: &HashSet<String>) -> Result<(), StorageError> {
        *self.favorites.lock() = ids.clone();
        Ok(())
    }
}

impl SearchHistoryStore for MemoryStore {
    fn search_history(&self) -> Result<Vec<SearchHistoryItem>, StorageError> {
        Ok(self.history.lock().clone())
    }

    fn record_search(
        &self,
        query: &str,
        timestamp: u64,
        limit: usize,
    ) -> Result<(), StorageError> {
        let mut history = self.history.lock();
        history.retain(|item| item.query != query);
        history.insert(
            0,
            SearchHistoryItem {
                query: query.to_string(),
                timestamp,
            },
        );
        history.truncate(limit);
        Ok(())
    }

    fn clear_search_history(&self) -> Result<(), StorageError> {
        self.history.lock().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_storage_is_migrated() {
        let storage = Storage::in_memory().unwrap();
        assert_eq!(storage.schema_version().unwrap(), 2);
    }

    #[test]
    fn test_memory_store_history_dedups_and_bounds() {
        let store = MemoryStore::new();
        store.record_search("amy", 1, 2).unwrap();
        store.record_search("bob", 2, 2).unwrap();
        store.record_search("amy", 3, 2).unwrap();
        store.record_search("cat", 4, 2).unwrap();

        let queries: Vec<String> = store
            .search_history()
            .unwrap()
            .into_iter()
            .map(|i| i.query)
            .collect();
        assert_eq!(queries, vec!["cat", "amy"]);
    }

    #[test]
    fn test_memory_store_favorites() {
        let store = MemoryStore::with_favorites(["1", "2"]);
        assert_eq!(store.favorite_ids().unwrap().len(), 2);
        store.save_favorite_ids(&HashSet::new()).unwrap();
        assert!(store.favorite_ids().unwrap().is_empty());
    }
}
