//! Storage operations for search history.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::{SearchHistoryStore, Storage, StorageError};

/// A remembered search query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub query: String,
    /// Epoch milliseconds of the most recent search.
    pub timestamp: u64,
}

impl SearchHistoryStore for Storage {
    fn search_history(&self) -> Result<Vec<SearchHistoryItem>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT query, searched_at FROM search_history ORDER BY searched_at DESC, rowid DESC",
        )?;
        let items = stmt
            .query_map([], |row| {
                Ok(SearchHistoryItem {
                    query: row.get(0)?,
                    timestamp: row.get::<_, i64>(1)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn record_search(
        &self,
        query: &str,
        timestamp: u64,
        limit: usize,
    ) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        // Re-inserting moves a repeated query to the front.
        tx.execute("DELETE FROM search_history WHERE query = ?1", params![query])?;
        tx.execute(
            "INSERT INTO search_history (query, searched_at) VALUES (?1, ?2)",
            params![query, timestamp as i64],
        )?;
        tx.execute(
            "DELETE FROM search_history WHERE rowid NOT IN (
                SELECT rowid FROM search_history
                ORDER BY searched_at DESC, rowid DESC LIMIT ?1
            )",
            params![limit as i64],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn clear_search_history(&self) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM search_history", [])?;
        Ok(())
    }
}
