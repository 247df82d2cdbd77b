//! SQLite-backed key-value store.
//!
//! A single `kv` table holds everything the core persists: the history
//! blob, the saved machine snapshot, and preference strings. The database
//! lives at `~/.config/focuslog/focuslog.db`.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{data_dir, KvStore};
use crate::error::StoreError;

/// SQLite database exposing [`KvStore`] semantics.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/focuslog/focuslog.db`.
    ///
    /// Creates the file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::WriteFailed {
            key: String::new(),
            message: format!("cannot create data directory: {e}"),
        })?;
        Self::open_at(dir.join("focuslog.db"))
    }

    /// Open the database at an explicit path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StoreError::WriteFailed {
                key: String::new(),
                message: format!("migration failed: {e}"),
            })
    }
}

impl KvStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StoreError::ReadFailed {
                key: key.into(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|e| StoreError::WriteFailed {
                key: key.into(),
                message: e.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map(|_| ())
            .map_err(|e| StoreError::WriteFailed {
                key: key.into(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.get("missing").unwrap(), None);
        db.set("theme_preference", "light").unwrap();
        assert_eq!(db.get("theme_preference").unwrap().as_deref(), Some("light"));
        db.set("theme_preference", "dark").unwrap();
        assert_eq!(db.get("theme_preference").unwrap().as_deref(), Some("dark"));
        db.remove("theme_preference").unwrap();
        assert_eq!(db.get("theme_preference").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focuslog.db");
        {
            let db = Database::open_at(&path).unwrap();
            db.set("session_history", "[]").unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.get("session_history").unwrap().as_deref(), Some("[]"));
    }
}
