//! Shared type definitions
//!
//! This module contains the data types shared across the application.

pub mod config;
pub mod theme;

pub use theme::{SidebarState, Theme};
