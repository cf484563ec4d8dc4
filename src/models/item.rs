//! Item-related data types for the filesystem tree and browser UI.

/// Kind tag for a filesystem item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Leaf entity, cannot hold children.
    File,
    /// Composite entity with an ordered child collection.
    Directory,
}

impl ItemKind {
    /// Check if this kind is a directory.
    pub fn is_dir(self) -> bool {
        matches!(self, ItemKind::Directory)
    }
}

/// Display category for a file, derived from its extension.
///
/// Used by the browser grid to pick an icon; it carries no semantics
/// beyond presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Image,
    Pdf,
    #[default]
    Unknown,
}

impl FileKind {
    /// Detect the display category from a file extension.
    ///
    /// The extension is expected without the leading dot, as produced
    /// by the tree model's `ext` accessor.
    pub fn from_ext(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "txt" | "rs" | "toml" => Self::Text,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => Self::Image,
            "pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_ext("md"), FileKind::Text);
        assert_eq!(FileKind::from_ext("PNG"), FileKind::Image);
        assert_eq!(FileKind::from_ext("pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_ext("xyz"), FileKind::Unknown);
        assert_eq!(FileKind::from_ext(""), FileKind::Unknown);
    }

    #[test]
    fn test_item_kind_is_dir() {
        assert!(ItemKind::Directory.is_dir());
        assert!(!ItemKind::File.is_dir());
    }
}
