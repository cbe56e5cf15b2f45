//! Durable namespaced key-value storage.
//!
//! This module provides:
//! - `StorageArea` trait for namespaced get/set/remove of JSON values
//! - `SqliteArea` backed by the shared SQLite database
//! - `Repository` for typed, string-keyed collections of records

mod area;
mod repository;
mod sqlite;

pub use area::{StorageArea, StorageError};
pub use repository::Repository;
pub use sqlite::SqliteArea;
