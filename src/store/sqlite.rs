//! SQLite-backed settings store

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;
use tracing::{debug, info};

use crate::store::error::StoreError;
use crate::store::traits::ConfigStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening settings database at {:?}", db_path);

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::from_connection(conn)
    }

    /// Opens a store that lives only as long as this value
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;
        Ok(store)
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        debug!("Settings schema ready");
        Ok(())
    }

    /// Returns when `key` was last written, in milliseconds since UNIX epoch
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>, StoreError> {
        let conn = self.lock_conn()?;
        let updated_at = conn
            .query_row(
                "SELECT updated_at FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated_at)
    }
}

impl ConfigStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let conn = self.lock_conn()?;
        let raw: Option<String> = conn
            .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&value)?;
        let now = Self::current_timestamp_ms();
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            (key, &raw, now),
        )?;
        debug!("Stored {} ({} bytes)", key, raw.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_unset_key() {
        let store = SqliteStore::in_memory().unwrap();

        assert_eq!(store.get("cobol-lsp.dialect.registry").unwrap(), None);
        assert_eq!(store.updated_at("cobol-lsp.dialect.registry").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_stored_value() {
        let store = SqliteStore::in_memory().unwrap();
        let value = json!([{ "name": "idms", "path": "/d/idms.json" }]);

        store.set("key", value.clone()).unwrap();

        assert_eq!(store.get("key").unwrap(), Some(value));
        assert!(store.updated_at("key").unwrap().unwrap() > 0);
    }

    #[test]
    fn set_overwrites_existing_value() {
        let store = SqliteStore::in_memory().unwrap();

        store.set("key", json!([1])).unwrap();
        store.set("key", json!([2])).unwrap();

        assert_eq!(store.get("key").unwrap(), Some(json!([2])));
    }

    #[test]
    fn values_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("settings.db");

        {
            let store = SqliteStore::new(&db_path).unwrap();
            store.set("key", json!({ "a": 1 })).unwrap();
        }

        let reopened = SqliteStore::new(&db_path).unwrap();
        assert_eq!(reopened.get("key").unwrap(), Some(json!({ "a": 1 })));
    }

    #[test]
    fn schema_has_updated_at_column_from_the_start() {
        let store = SqliteStore::in_memory().unwrap();
        let conn = store.lock_conn().unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(settings)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(columns, vec!["key", "value", "updated_at"]);
    }

    #[test]
    fn reopening_existing_database_keeps_schema_and_values() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("settings.db");

        SqliteStore::new(&db_path)
            .unwrap()
            .set("key", json!(["kept"]))
            .unwrap();
        let store = SqliteStore::new(&db_path).unwrap();

        assert_eq!(store.get("key").unwrap(), Some(json!(["kept"])));
        assert!(store.updated_at("key").unwrap().unwrap() > 0);
    }

    #[test]
    fn get_fails_when_stored_text_is_not_json() {
        let store = SqliteStore::in_memory().unwrap();
        {
            let conn = store.lock_conn().unwrap();
            conn.execute(
                "INSERT INTO settings (key, value, updated_at) VALUES ('key', 'not json', 0)",
                [],
            )
            .unwrap();
        }

        assert!(matches!(store.get("key"), Err(StoreError::Json(_))));
    }
}
