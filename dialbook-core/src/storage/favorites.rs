//! Storage operations for favorite contacts.

use std::collections::HashSet;

use rusqlite::params;

use super::{FavoriteStore, Storage, StorageError};

impl Storage {
    /// Loads the ids of all favorite contacts.
    pub fn load_favorite_ids(&self) -> Result<HashSet<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT contact_id FROM favorites")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(ids)
    }

    /// Replaces the stored favorite set.
    ///
    /// Ids that stay favorite keep their original `added_at`.
    pub fn replace_favorite_ids(&self, ids: &HashSet<String>) -> Result<(), StorageError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let tx = self.conn.unchecked_transaction()?;
        let existing = {
            let mut stmt = tx.prepare("SELECT contact_id FROM favorites")?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        for id in existing.iter().filter(|id| !ids.contains(*id)) {
            tx.execute("DELETE FROM favorites WHERE contact_id = ?1", params![id])?;
        }
        for id in ids {
            tx.execute(
                "INSERT OR IGNORE INTO favorites (contact_id, added_at) VALUES (?1, ?2)",
                params![id, now as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Returns whether a contact is marked favorite.
    pub fn is_favorite(&self, contact_id: &str) -> Result<bool, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE contact_id = ?1",
            params![contact_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

impl FavoriteStore for Storage {
    fn favorite_ids(&self) -> Result<HashSet<String>, StorageError> {
        self.load_favorite_ids()
    }

    fn save_favorite_ids(&self, ids: &HashSet<String>) -> Result<(), StorageError> {
        self.replace_favorite_ids(ids)
    }
}
