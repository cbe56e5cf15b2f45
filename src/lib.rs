//! Pantry
//!
//! Persisted configuration for pluggable language-model completion
//! backends: which backends exist, how each one is reached and
//! authenticated, and which one is currently the default.
//!
//! ## Main Components
//!
//! - [`db`] - SQLite database backing the key-value store
//! - [`storage`] - Namespaced key-value areas and typed repositories
//! - [`models`] - Backend identifiers, config records, and the manager
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use pantry::{ConfigManager, Database};
//!
//! let db = Arc::new(Database::open()?);
//! db.migrate()?;
//!
//! let manager = ConfigManager::new(db);
//! let config = manager.get_default().await?;
//! if config.is_incomplete() {
//!     // prompt the user for an API key, pointing at
//!     // config.id.api_key_url()
//! }
//! ```

pub mod db;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use db::Database;
pub use models::{ConfigManager, ManagerError, ModelConfig, ModelId};
pub use storage::{Repository, SqliteArea, StorageArea, StorageError};
