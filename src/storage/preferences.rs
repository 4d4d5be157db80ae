//! Theme preference storage
//!
//! Best-effort helpers around the `"theme"` key. Failures are logged and
//! never reach the UI.

use crate::storage::KeyValueStore;
use crate::types::Theme;

/// Key under which the theme is persisted
pub const THEME_KEY: &str = "theme";

/// Load the persisted theme
///
/// Returns the light theme if the value is missing, unknown, or unreadable
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(value) => {
            let theme = Theme::from_stored(value.as_deref());
            tracing::debug!("Loaded theme preference: {}", theme.as_str());
            theme
        }
        Err(e) => {
            tracing::warn!("Failed to load theme preference, using light: {}", e);
            Theme::Light
        }
    }
}

/// Persist the theme, ignoring failures
pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    match store.set(THEME_KEY, theme.as_str()) {
        Ok(()) => tracing::debug!("Saved theme preference: {}", theme.as_str()),
        Err(e) => tracing::warn!("Failed to save theme preference: {}", e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    /// Store whose every operation fails
    pub(crate) struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::NoDataDir)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn test_load_theme_values() {
        assert_eq!(load_theme(&MemoryStore::new()), Theme::Light);
        assert_eq!(load_theme(&MemoryStore::with_entry("theme", "dark")), Theme::Dark);
        assert_eq!(load_theme(&MemoryStore::with_entry("theme", "light")), Theme::Light);
        assert_eq!(load_theme(&MemoryStore::with_entry("theme", "purple")), Theme::Light);
    }

    #[test]
    fn test_save_theme_writes_literal() {
        let store = MemoryStore::new();
        save_theme(&store, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        save_theme(&store, Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_broken_store_is_best_effort() {
        assert_eq!(load_theme(&BrokenStore), Theme::Light);
        save_theme(&BrokenStore, Theme::Dark);
    }
}
