//! Typed keyed storage over a [`StorageArea`].

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::area::{StorageArea, StorageError};

/// A string-keyed collection of records of one type.
///
/// Records are serialized to JSON on write and deserialized on read; the
/// collection name is the namespace of the underlying area. The repository
/// holds no state of its own, storage is the single source of truth.
pub struct Repository<T> {
    area: Box<dyn StorageArea>,
    _record: PhantomData<T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a repository over the given storage area.
    pub fn new(area: impl StorageArea + 'static) -> Self {
        Self {
            area: Box::new(area),
            _record: PhantomData,
        }
    }

    /// The collection name this repository reads and writes under.
    pub fn collection(&self) -> &str {
        self.area.namespace()
    }

    /// Fetch the record stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.area.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Store `record` under `key`, replacing any previous record.
    pub async fn set(&self, key: &str, record: &T) -> Result<(), StorageError> {
        self.area.set(key, serde_json::to_value(record)?).await
    }

    /// Delete the record stored under `key`.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.area.remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::Deserialize;
    use tempfile::TempDir;

    use crate::db::Database;
    use crate::storage::SqliteArea;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Fixture {
        name: String,
        count: u32,
        note: Option<String>,
    }

    fn setup_repo() -> (TempDir, Repository<Fixture>) {
        let tmp = TempDir::new().unwrap();
        let db = Database::open_at(tmp.path().join("test.db")).unwrap();
        db.migrate().unwrap();
        let area = SqliteArea::new(Arc::new(db), "fixtures");
        (tmp, Repository::new(area))
    }

    #[tokio::test]
    async fn collection_reports_namespace() {
        let (_tmp, repo) = setup_repo();
        assert_eq!(repo.collection(), "fixtures");
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let (_tmp, repo) = setup_repo();
        assert!(repo.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_returns_equal_record() {
        let (_tmp, repo) = setup_repo();
        let record = Fixture {
            name: "first".to_string(),
            count: 3,
            note: None,
        };

        repo.set("first", &record).await.unwrap();

        assert_eq!(repo.get("first").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn set_overwrites_record() {
        let (_tmp, repo) = setup_repo();
        let old = Fixture {
            name: "r".to_string(),
            count: 1,
            note: None,
        };
        let new = Fixture {
            name: "r".to_string(),
            count: 2,
            note: Some("updated".to_string()),
        };

        repo.set("r", &old).await.unwrap();
        repo.set("r", &new).await.unwrap();

        assert_eq!(repo.get("r").await.unwrap(), Some(new));
    }

    #[tokio::test]
    async fn remove_then_get_returns_none() {
        let (_tmp, repo) = setup_repo();
        let record = Fixture {
            name: "gone".to_string(),
            count: 0,
            note: None,
        };

        repo.set("gone", &record).await.unwrap();
        repo.remove("gone").await.unwrap();

        assert!(repo.get("gone").await.unwrap().is_none());
    }
}
