//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the
//! application: desktop metadata, grid geometry, and the name pools the
//! synthetic demo tree is seeded from.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used for the desktop surface label.
pub const APP_NAME: &str = "webdesk";

/// Title of the file-browser window.
pub const BROWSER_WINDOW_TITLE: &str = "Files";

// =============================================================================
// Grid Configuration
// =============================================================================

/// Virtualized file-grid geometry.
pub mod grid {
    /// Fixed height of one grid row in CSS pixels. Rows are uniform;
    /// the virtualizer does not support variable heights.
    pub const ROW_HEIGHT_PX: f64 = 96.0;

    /// Number of tiles laid out horizontally in one row group.
    pub const ITEMS_PER_ROW: usize = 4;

    /// Extra rows rendered above and below the viewport to mask
    /// pop-in during fast scrolling.
    pub const OVERSCAN_ROWS: usize = 2;

    /// Viewport height assumed before the scroll container has been
    /// measured (first paint happens before the mount effect runs).
    pub const FALLBACK_VIEWPORT_PX: f64 = 480.0;
}

// =============================================================================
// Demo Tree Seeding
// =============================================================================

/// Name pools and size bounds for the randomized demo filesystem.
pub mod seed {
    /// Root directory name; empty so paths render as `/...`.
    pub const ROOT_NAME: &str = "";

    /// Top-level directories always present.
    pub const TOP_DIRS: &[&str] = &["documents", "projects", "pictures", "music"];

    /// File name stems combined with [`FILE_EXTS`] when seeding.
    pub const FILE_STEMS: &[&str] = &[
        "notes", "draft", "report", "sketch", "backup", "todo", "meeting", "scan",
    ];

    /// Extensions drawn for seeded files.
    pub const FILE_EXTS: &[&str] = &["md", "txt", "png", "jpg", "pdf", "rs", "toml"];

    /// Nested directory names drawn for second-level directories.
    pub const SUB_DIRS: &[&str] = &["archive", "drafts", "shared", "old"];

    /// Per-directory file count bounds (inclusive).
    pub const FILES_PER_DIR: (usize, usize) = (3, 9);

    /// Second-level directory count bounds per top-level directory.
    pub const SUBDIRS_PER_DIR: (usize, usize) = (0, 2);

    /// Directory padded with a large flat batch of files so the grid's
    /// windowed rendering is observable.
    pub const BULK_DIR: &str = "pictures";

    /// File count for the bulk directory.
    pub const BULK_FILE_COUNT: usize = 400;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
