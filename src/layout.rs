//! Documentation layout state
//!
//! Holds the two independent UI flags, the toggles that mutate them, and
//! the render model derived from them. Nothing here depends on Dioxus.

use crate::storage::preferences::{load_theme, save_theme};
use crate::storage::KeyValueStore;
use crate::types::{SidebarState, Theme};

/// State of the documentation layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub theme: Theme,
    pub sidebar: SidebarState,
}

impl LayoutState {
    /// Rehydrate the persisted theme. Runs once, after the first render.
    pub fn restore(&mut self, store: &dyn KeyValueStore) {
        self.theme = load_theme(store);
    }

    /// Flip the theme and persist the new value
    pub fn toggle_dark_mode(&mut self, store: &dyn KeyValueStore) {
        self.theme = self.theme.toggled();
        save_theme(store, self.theme);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = self.sidebar.toggled();
    }

    pub fn view(&self) -> LayoutView {
        LayoutView::new(self.theme, self.sidebar)
    }
}

/// One entry of the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub badge: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        badge: "A",
        label: "Installation",
        active: true,
    },
    NavEntry {
        badge: "B",
        label: "Customization",
        active: false,
    },
    NavEntry {
        badge: "C",
        label: "Changelog",
        active: false,
    },
];

/// Rendered form of a navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub badge: &'static str,
    /// `None` when the sidebar is collapsed
    pub label: Option<&'static str>,
    pub row_class: String,
    pub badge_class: &'static str,
}

/// Everything the page needs to render, as a pure function of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutView {
    pub root_class: &'static str,
    pub sidebar_class: String,
    pub brand: &'static str,
    pub menu_icon_class: &'static str,
    pub nav_items: Vec<NavItemView>,
    pub knob_class: String,
}

impl LayoutView {
    pub fn new(theme: Theme, sidebar: SidebarState) -> Self {
        let expanded = sidebar.is_expanded();

        let width = if expanded { "w-64" } else { "w-20" };
        let knob = if theme.is_dark() {
            "translate-x-6 bg-blue-600"
        } else {
            "translate-x-1 bg-yellow-400"
        };

        Self {
            root_class: if theme.is_dark() {
                "dark min-h-screen"
            } else {
                "min-h-screen"
            },
            sidebar_class: format!(
                "{width} bg-white dark:bg-gray-800 shadow-md p-6 flex flex-col"
            ),
            brand: if expanded { "WebTech" } else { "W" },
            menu_icon_class: if theme.is_dark() { "text-white" } else { "text-black" },
            nav_items: NAV_ENTRIES
                .iter()
                .map(|entry| NavItemView::new(entry, expanded))
                .collect(),
            knob_class: format!(
                "{knob} w-5 h-5 rounded-full transform transition-transform duration-300"
            ),
        }
    }
}

impl NavItemView {
    fn new(entry: &NavEntry, expanded: bool) -> Self {
        let row_class = match (entry.active, expanded) {
            (true, true) => {
                "flex items-center text-lg font-semibold text-blue-600 dark:text-blue-400".to_string()
            }
            (true, false) => {
                "flex items-center justify-center text-blue-600 dark:text-blue-400".to_string()
            }
            (false, sidebar_expanded) => format!(
                "flex items-center {} text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-300",
                if sidebar_expanded {
                    "text-lg font-medium"
                } else {
                    "justify-center"
                }
            ),
        };

        Self {
            badge: entry.badge,
            label: expanded.then_some(entry.label),
            row_class,
            badge_class: if entry.active {
                "bg-blue-100 dark:bg-blue-600 text-blue-600 dark:text-white rounded-md w-8 h-8 flex items-center justify-center transition-colors duration-300"
            } else {
                "bg-gray-200 dark:bg-gray-700 text-gray-600 dark:text-gray-300 rounded-md w-8 h-8 flex items-center justify-center"
            },
        }
    }
}
