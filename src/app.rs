//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::types::config::AppConfig;
use crate::ui::DocumentationLayout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Global application state shared across components
///
/// Built once in `main` and injected into the root context at launch.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Open the on-disk preference store, falling back to memory so a
    /// missing data directory only costs persistence
    pub fn from_config(config: &AppConfig) -> Self {
        let opened = config.store_path().and_then(FileStore::open);
        let store: Arc<dyn KeyValueStore> = match opened {
            Ok(store) => {
                tracing::info!("Preference store: {}", store.path().display());
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!("Preference store unavailable, preferences won't persist: {}", e);
                Arc::new(MemoryStore::new())
            }
        };
        Self::new(store)
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        DocumentationLayout {}
    }
}
