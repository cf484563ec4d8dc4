//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuChevronDown as ChevronDown, LuChevronRight as ChevronRight,
        LuFile as File, LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuHouse as Home, LuImage as FileImage, LuPencil as Edit, LuPlus as Plus,
        LuTrash2 as Trash,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsHouseFill as Home,
        BsPencil as Edit, BsPlusLg as Plus, BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(PLUS, Plus);
themed_icon!(TRASH, Trash);
themed_icon!(EDIT, Edit);
