//! SQLite-backed storage area.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::params;
use serde_json::Value;

use crate::db::Database;

use super::area::{StorageArea, StorageError};

/// A [`StorageArea`] over one namespace of the shared `kv` table.
///
/// Multiple areas may share the same [`Database`]; rows never leak across
/// namespaces. Each write stamps the row with the current time.
pub struct SqliteArea {
    db: Arc<Database>,
    namespace: String,
}

impl SqliteArea {
    /// Create an area over `db` scoped to `namespace`.
    pub fn new(db: Arc<Database>, namespace: impl Into<String>) -> Self {
        Self {
            db,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl StorageArea for SqliteArea {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let conn = self.db.conn();
        let result: Result<String, _> = conn.query_row(
            "SELECT value FROM kv WHERE namespace = ? AND key = ?",
            [self.namespace.as_str(), key],
            |row| row.get(0),
        );

        match result {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Database(e)),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&value)?;
        self.db.conn().execute(
            "INSERT INTO kv (namespace, key, value, updated_at) VALUES (?, ?, ?, ?)
             ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.namespace, key, raw, Utc::now().timestamp()],
        )?;

        tracing::debug!(namespace = %self.namespace, key = %key, "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.conn().execute(
            "DELETE FROM kv WHERE namespace = ? AND key = ?",
            [self.namespace.as_str(), key],
        )?;
        Ok(())
    }
}
