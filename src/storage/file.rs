//! File-backed store
//!
//! Keeps all entries in a single flat JSON object on disk.

use crate::storage::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`, creating the parent directory if needed.
    /// The file itself is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::debug!("Opened preference store at {}", path.display());
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        // A corrupt file is replaced; I/O failures leave it untouched
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Json(e)) => {
                tracing::warn!("Discarding corrupt preference store: {}", e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_other_keys_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"font": "large"}"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        store.set("theme", "light").unwrap();

        assert_eq!(store.get("font").unwrap().as_deref(), Some("large"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(matches!(store.get("theme"), Err(StorageError::Json(_))));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unreadable_store_is_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "data").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(matches!(store.set("theme", "dark"), Err(StorageError::Io(_))));
        assert!(path.is_dir());
        assert!(path.join("keep").exists());
    }
}
