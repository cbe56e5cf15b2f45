//! Persisted backend configuration and default selection.

use std::sync::Arc;

use thiserror::Error;

use crate::db::Database;
use crate::storage::{Repository, SqliteArea, StorageError};

use super::config::ModelConfig;
use super::id::ModelId;

/// Collection holding one [`ModelConfig`] per backend.
pub const CONFIGS_COLLECTION: &str = "configs";

/// Namespace holding the single default-selection entry.
const DEFAULT_SELECTION_NAMESPACE: &str = "configs-default-";

/// Key of the default-selection entry within its namespace.
const DEFAULT_SELECTION_KEY: &str = "id";

/// Errors that can occur while managing configurations.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Stateless accessor for per-backend configuration records.
///
/// All state lives in storage: the `configs` collection keyed by backend
/// name, and a separately namespaced entry naming the current default
/// backend. Concurrent writers race with last-write-wins semantics.
pub struct ConfigManager {
    configs: Repository<ModelConfig>,
    selection: Repository<ModelId>,
}

impl ConfigManager {
    /// Create a manager over the given database.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            configs: Repository::new(SqliteArea::new(db.clone(), CONFIGS_COLLECTION)),
            selection: Repository::new(SqliteArea::new(db, DEFAULT_SELECTION_NAMESPACE)),
        }
    }

    /// Fetch the stored configuration for `id`, if any.
    pub async fn get(&self, id: ModelId) -> Result<Option<ModelConfig>, ManagerError> {
        Ok(self.configs.get(&id.to_string()).await?)
    }

    /// Store `config` under its backend id, replacing any previous record.
    pub async fn set(&self, config: &ModelConfig) -> Result<(), ManagerError> {
        self.configs.set(&config.id.to_string(), config).await?;
        Ok(())
    }

    /// Delete the stored configuration for `id`.
    pub async fn remove(&self, id: ModelId) -> Result<(), ManagerError> {
        self.configs.remove(&id.to_string()).await?;
        Ok(())
    }

    /// The currently selected default backend, if one has been persisted.
    pub async fn default_id(&self) -> Result<Option<ModelId>, ManagerError> {
        Ok(self.selection.get(DEFAULT_SELECTION_KEY).await?)
    }

    /// Persist `id` as the process-wide default backend.
    pub async fn set_default(&self, id: ModelId) -> Result<(), ManagerError> {
        self.selection.set(DEFAULT_SELECTION_KEY, &id).await?;
        tracing::debug!(model = %id, "Default backend updated");
        Ok(())
    }

    /// Resolve the default backend's configuration.
    ///
    /// On first read the selection entry is absent; the fallback backend is
    /// persisted before returning so later reads observe the same choice.
    /// A missing configuration record is synthesized from static defaults,
    /// never treated as an error.
    pub async fn get_default(&self) -> Result<ModelConfig, ManagerError> {
        let id = match self.default_id().await? {
            Some(id) => id,
            None => {
                let id = ModelId::default();
                self.set_default(id).await?;
                tracing::info!(model = %id, "Bootstrapped default backend selection");
                id
            }
        };

        match self.get(id).await? {
            Some(config) => Ok(config),
            None => Ok(ModelConfig::init(id)),
        }
    }
}
