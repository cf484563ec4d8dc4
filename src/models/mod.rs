//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ItemKind`] - File/directory kind tag for tree items
//! - [`FileKind`] - Extension-derived display category for icons

mod item;

pub use item::{FileKind, ItemKind};
