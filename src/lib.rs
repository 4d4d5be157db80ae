//! WebTech Docs library
//!
//! Core library for the WebTech documentation desktop page.

pub mod app;
pub mod layout;
pub mod storage;
pub mod types;
pub mod ui;
