//! UI components for the documentation page
//!
//! This module contains all user interface components built with Dioxus.

pub mod content;
pub mod header;
pub mod layout;
pub mod sidebar;

pub use layout::DocumentationLayout;
