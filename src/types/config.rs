//! Configuration types
//!
//! Application configuration, read once at startup.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title of the desktop window
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// File name of the preference store inside the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_window_title() -> String {
    "WebTech Documentation".to_string()
}

fn default_store_file() -> String {
    "preferences.json".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            data_dir: None,
            store_file: default_store_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from the data directory
    ///
    /// A missing file yields defaults; callers decide how to report errors
    pub fn try_load() -> Result<Self, StorageError> {
        Self::load_from(&get_data_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            tracing::debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Full path of the preference store
    pub fn store_path(&self) -> Result<PathBuf, StorageError> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => get_data_dir()?,
        };
        Ok(dir.join(&self.store_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window_title, "WebTech Documentation");
        assert_eq!(config.store_file, "preferences.json");
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"window_title": "Docs"}"#).expect("Failed to deserialize");
        assert_eq!(config.window_title, "Docs");
        assert_eq!(config.store_file, "preferences.json");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.store_file, "preferences.json");
    }

    #[test]
    fn test_load_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn test_store_path_honors_override() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/webtech")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.store_path().unwrap(),
            PathBuf::from("/tmp/webtech/preferences.json")
        );
    }
}
