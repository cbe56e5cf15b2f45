//! Namespaced key-value storage abstraction.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable, namespaced key-value store of JSON values.
///
/// Absence of a key is a valid outcome and is reported as `Ok(None)`,
/// never as an error. Read/write failures propagate unchanged.
#[async_trait]
pub trait StorageArea: Send + Sync {
    /// The namespace this area reads and writes under.
    fn namespace(&self) -> &str;

    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Deleting a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
