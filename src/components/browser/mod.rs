//! File browser UI.
//!
//! - [`Browser`] - toolbar + sidebar + grid + path bar composition
//! - [`grid`] - virtualized file grid and the generic `VirtualList`
//! - [`tree`] - directory sidebar with expand/collapse
//! - [`pathbar`] - clickable ancestor chain

mod browser;
mod grid;
mod pathbar;
mod toolbar;
mod tree;

pub use browser::Browser;
