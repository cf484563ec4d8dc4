//! Core state of the desktop file browser.
//!
//! This module provides:
//! - [`tree`] - arena-backed filesystem tree model
//! - [`selection`] - generic multi-selection with anchor-based ranges
//! - [`virtualize`] - row-windowing math for the grid
//! - [`explorer`] - browser view model tying the three together
//! - [`seed`] - synthetic seeding for the in-memory demo
//!
//! Only the surface the view layer consumes is re-exported here.

pub mod error;
mod explorer;
mod seed;
mod selection;
mod tree;
mod virtualize;

pub use explorer::ExplorerState;
pub use seed::demo_tree;
pub use selection::ClickModifiers;
pub use tree::NodeId;
pub use virtualize::{Viewport, Virtualizer};
