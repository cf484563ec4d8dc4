//! UI components built with Leptos.
//!
//! - [`desktop`] - Desktop surface and window framing
//! - [`browser`] - File browser UI (toolbar, tree, grid, path bar)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod desktop;
pub mod icons;

pub use desktop::Desktop;
