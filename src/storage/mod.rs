//! Persistent storage
//!
//! This module handles persistence of user preferences behind a small
//! string key-value interface.

pub mod file;
pub mod memory;
pub mod preferences;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to determine the data directory")]
    NoDataDir,
    #[error("store lock poisoned")]
    Poisoned,
}

/// Per-user data directory of the application
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("bd", "WebTech", "WebTechDocs")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}

/// Durable string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
