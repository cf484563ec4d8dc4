//! Arena-backed filesystem tree model.
//!
//! Files and directories form a single-rooted tree held in one arena
//! ([`FsTree`]); items are addressed by [`NodeId`] and each node keeps
//! its parent's id rather than a live back-reference, so ancestors are
//! reachable without reference-counted cycles. Deleted items are
//! tombstoned in place and never reused.
//!
//! # Ownership discipline
//!
//! Parent/child links are mutated exclusively by [`FsTree::add`] and
//! [`FsTree::delete`]; nothing outside this module assigns a parent.

use std::cmp::Ordering;

use crate::core::error::FsError;
use crate::models::ItemKind;

/// Opaque identity of an item inside an [`FsTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single arena slot: one file or directory.
#[derive(Clone, Debug)]
struct FsNode {
    name: String,
    kind: ItemKind,
    parent: Option<NodeId>,
    /// Insertion-ordered children (directories only; empty for files).
    /// Display order is derived on read, never stored.
    children: Vec<NodeId>,
    /// Tombstone flag; a deleted directory rejects further `add` calls.
    deleted: bool,
}

/// Single-rooted filesystem tree.
///
/// # Path convention
///
/// `path` walks parent references to the root and joins every segment
/// with `/`, the root contributing its own name as the first segment.
/// A root named `""` with children `foo` and `bar` therefore yields
/// `/foo` and `/bar`.
#[derive(Clone, Debug)]
pub struct FsTree {
    nodes: Vec<FsNode>,
    root: NodeId,
}

impl FsTree {
    /// Create a tree containing only a root directory.
    ///
    /// The root is built directly rather than through [`FsTree::create`],
    /// so an empty root name is allowed.
    pub fn new(root_name: &str) -> Self {
        let root = FsNode {
            name: root_name.to_string(),
            kind: ItemKind::Directory,
            parent: None,
            children: Vec::new(),
            deleted: false,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// The root directory of this tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Item factory: returns a new, unattached file or directory.
    ///
    /// The name is trimmed first; an empty post-trim name fails with
    /// [`FsError::InvalidArgument`]. Attachment is a separate step, see
    /// [`FsTree::add`].
    pub fn create(&mut self, kind: ItemKind, name: &str) -> Result<NodeId, FsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FsError::InvalidArgument(
                "item name must not be empty".to_string(),
            ));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(FsNode {
            name: name.to_string(),
            kind,
            parent: None,
            children: Vec::new(),
            deleted: false,
        });
        Ok(id)
    }

    /// Attach `item` as a child of `dir`.
    ///
    /// Sets the item's parent and appends it to the directory's child
    /// collection. An already-attached item moves: it leaves its old
    /// parent's child list first, so every non-root item has exactly one
    /// parent at all times. Returns the item id so construction can be
    /// chained.
    ///
    /// # Errors
    ///
    /// [`FsError::InvalidOperation`] if `dir` is not a directory, has
    /// been tombstoned by a previous delete, or sits beneath `item`
    /// (reparenting a directory under its own descendant would knot the
    /// parent chain into a cycle).
    pub fn add(&mut self, dir: NodeId, item: NodeId) -> Result<NodeId, FsError> {
        if !self.is_dir(dir) {
            return Err(FsError::InvalidOperation(
                "cannot add a child to a file".to_string(),
            ));
        }
        if self.is_deleted(dir) {
            return Err(FsError::InvalidOperation(
                "cannot add a child to a deleted directory".to_string(),
            ));
        }
        let mut cursor = Some(dir);
        while let Some(node) = cursor {
            if node == item {
                return Err(FsError::InvalidOperation(
                    "cannot add an item beneath itself".to_string(),
                ));
            }
            cursor = self.nodes[node.0].parent;
        }
        if let Some(old) = self.nodes[item.0].parent {
            let siblings = &mut self.nodes[old.0].children;
            if let Some(pos) = siblings.iter().position(|c| *c == item) {
                siblings.remove(pos);
            }
        }
        self.nodes[item.0].parent = Some(dir);
        self.nodes[dir.0].children.push(item);
        Ok(item)
    }

    /// Delete `item` from `dir`'s children, cascading through
    /// directories.
    ///
    /// Directories are emptied first: the child list is snapshotted
    /// before recursing because each recursive delete mutates it. Every
    /// descendant is tombstoned, then `item` itself, and finally `item`
    /// is removed from `dir` by identity. Removing an item that is no
    /// longer present (already swept by an ancestor's cascade) is a
    /// harmless no-op, not an error.
    pub fn delete(&mut self, dir: NodeId, item: NodeId) {
        if self.is_dir(item) {
            let snapshot = self.nodes[item.0].children.clone();
            for child in snapshot {
                self.delete(item, child);
            }
        }
        self.nodes[item.0].deleted = true;
        let siblings = &mut self.nodes[dir.0].children;
        if let Some(pos) = siblings.iter().position(|c| *c == item) {
            siblings.remove(pos);
        }
    }

    /// Children of `dir`, name-sorted, as a fresh snapshot.
    ///
    /// Recomputed on every read; two consecutive reads are independent
    /// allocations. O(n log n) per read is an accepted tradeoff, fan-out
    /// is assumed modest. Files yield an empty list.
    pub fn children(&self, dir: NodeId) -> Vec<NodeId> {
        let mut out = self.nodes[dir.0].children.clone();
        out.sort_by(|a, b| compare_names(self.name(*a), self.name(*b)));
        out
    }

    /// Absolute path of an item: an O(depth) walk to the root.
    pub fn path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            segments.push(self.name(node));
            cursor = self.nodes[node.0].parent;
        }
        segments.reverse();
        segments.join("/")
    }

    /// File extension: the substring after the last `.` in the name.
    ///
    /// Empty when the name has no dot, ends with a dot, or is a
    /// dot-prefixed name with no further dot (`.gitignore`).
    pub fn ext(&self, id: NodeId) -> &str {
        match self.name(id).rfind('.') {
            None | Some(0) => "",
            Some(i) => &self.name(id)[i + 1..],
        }
    }

    /// Rename an item in place. The name is trimmed; an empty post-trim
    /// name fails with [`FsError::InvalidArgument`].
    ///
    /// Uniqueness within the parent is not enforced here; callers check
    /// availability first (see the view model's `is_name_available`).
    pub fn rename(&mut self, id: NodeId, name: &str) -> Result<(), FsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FsError::InvalidArgument(
                "item name must not be empty".to_string(),
            ));
        }
        self.nodes[id.0].name = name.to_string();
        Ok(())
    }

    /// Item name.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Item kind tag.
    pub fn kind(&self, id: NodeId) -> ItemKind {
        self.nodes[id.0].kind
    }

    /// Check if an item is a directory.
    pub fn is_dir(&self, id: NodeId) -> bool {
        self.nodes[id.0].kind.is_dir()
    }

    /// Check if an item has been tombstoned.
    pub fn is_deleted(&self, id: NodeId) -> bool {
        self.nodes[id.0].deleted
    }

    /// Owning directory of an item (`None` for the root).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }
}

/// Name ordering used for directory listings.
///
/// Case-insensitive comparison with a case-sensitive tiebreak; a
/// pragmatic stand-in for locale collation that keeps `readme.md` and
/// `README.md` adjacent.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root with `docs/` (containing `guide.md`, `notes.txt`) and a
    /// loose `readme.md`.
    fn create_test_tree() -> (FsTree, NodeId, NodeId) {
        let mut tree = FsTree::new("");
        let docs = tree.create(ItemKind::Directory, "docs").unwrap();
        tree.add(tree.root(), docs).unwrap();
        let guide = tree.create(ItemKind::File, "guide.md").unwrap();
        tree.add(docs, guide).unwrap();
        let notes = tree.create(ItemKind::File, "notes.txt").unwrap();
        tree.add(docs, notes).unwrap();
        let readme = tree.create(ItemKind::File, "readme.md").unwrap();
        tree.add(tree.root(), readme).unwrap();
        (tree, docs, readme)
    }

    #[test]
    fn test_create_trims_name() {
        let mut tree = FsTree::new("");
        let id = tree.create(ItemKind::File, "  padded.md  ").unwrap();
        assert_eq!(tree.name(id), "padded.md");
    }

    #[test]
    fn test_create_empty_name_fails() {
        let mut tree = FsTree::new("");
        let err = tree.create(ItemKind::File, "   ").unwrap_err();
        assert!(matches!(err, FsError::InvalidArgument(_)));
    }

    #[test]
    fn test_children_sorted_regardless_of_add_order() {
        let mut tree = FsTree::new("");
        let root = tree.root();
        for name in ["zeta.txt", "Alpha.txt", "midway.txt"] {
            let id = tree.create(ItemKind::File, name).unwrap();
            tree.add(root, id).unwrap();
        }
        let names: Vec<_> = tree
            .children(root)
            .into_iter()
            .map(|c| tree.name(c).to_string())
            .collect();
        assert_eq!(names, vec!["Alpha.txt", "midway.txt", "zeta.txt"]);
    }

    #[test]
    fn test_children_reads_are_independent_snapshots() {
        let (tree, docs, _) = create_test_tree();
        let first = tree.children(docs);
        let second = tree.children(docs);
        assert_eq!(first, second);
        // A later mutation must not affect an already-taken snapshot.
        let mut tree = tree;
        let extra = tree.create(ItemKind::File, "extra.md").unwrap();
        tree.add(docs, extra).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(tree.children(docs).len(), 3);
    }

    #[test]
    fn test_add_to_deleted_directory_fails() {
        let (mut tree, docs, _) = create_test_tree();
        tree.delete(tree.root(), docs);
        let orphan = tree.create(ItemKind::File, "late.md").unwrap();
        let err = tree.add(docs, orphan).unwrap_err();
        assert!(matches!(err, FsError::InvalidOperation(_)));
    }

    #[test]
    fn test_add_to_file_fails() {
        let (mut tree, _, readme) = create_test_tree();
        let item = tree.create(ItemKind::File, "child.md").unwrap();
        let err = tree.add(readme, item).unwrap_err();
        assert!(matches!(err, FsError::InvalidOperation(_)));
    }

    #[test]
    fn test_readd_moves_item_between_directories() {
        let (mut tree, docs, readme) = create_test_tree();
        // readme starts under the root; re-adding it under docs is a
        // move, not a second attachment.
        tree.add(docs, readme).unwrap();
        assert_eq!(tree.parent(readme), Some(docs));
        assert!(tree.children(docs).contains(&readme));
        assert!(!tree.children(tree.root()).contains(&readme));
        assert_eq!(tree.path(readme), "/docs/readme.md");
    }

    #[test]
    fn test_add_under_own_descendant_fails() {
        let mut tree = FsTree::new("");
        let outer = tree.create(ItemKind::Directory, "outer").unwrap();
        tree.add(tree.root(), outer).unwrap();
        let inner = tree.create(ItemKind::Directory, "inner").unwrap();
        tree.add(outer, inner).unwrap();

        let err = tree.add(inner, outer).unwrap_err();
        assert!(matches!(err, FsError::InvalidOperation(_)));
        // The chain is intact and still terminates.
        assert_eq!(tree.path(inner), "/outer/inner");

        let err = tree.add(outer, outer).unwrap_err();
        assert!(matches!(err, FsError::InvalidOperation(_)));
    }

    #[test]
    fn test_delete_cascades_and_tombstones_descendants() {
        let (mut tree, docs, _) = create_test_tree();
        let grandchildren = tree.children(docs);
        tree.delete(tree.root(), docs);

        assert!(tree.is_deleted(docs));
        for child in grandchildren {
            assert!(tree.is_deleted(child));
        }
        // The directory is gone from the root's listing.
        let names: Vec<_> = tree
            .children(tree.root())
            .into_iter()
            .map(|c| tree.name(c).to_string())
            .collect();
        assert_eq!(names, vec!["readme.md"]);
        // And its own child list was drained by the cascade.
        assert!(tree.children(docs).is_empty());
    }

    #[test]
    fn test_delete_file_has_no_cascade() {
        let (mut tree, docs, readme) = create_test_tree();
        tree.delete(tree.root(), readme);
        assert!(tree.is_deleted(readme));
        assert!(!tree.is_deleted(docs));
        assert_eq!(tree.children(docs).len(), 2);
    }

    #[test]
    fn test_delete_already_removed_is_noop() {
        let (mut tree, docs, _) = create_test_tree();
        let guide = tree.children(docs)[0];
        tree.delete(tree.root(), docs);
        // The cascade already removed guide; deleting it again must not
        // raise or disturb anything.
        tree.delete(docs, guide);
        assert!(tree.is_deleted(guide));
    }

    #[test]
    fn test_path_walks_to_root() {
        let mut tree = FsTree::new("");
        let a = tree.create(ItemKind::Directory, "a").unwrap();
        tree.add(tree.root(), a).unwrap();
        let b = tree.create(ItemKind::File, "b.txt").unwrap();
        tree.add(a, b).unwrap();
        assert_eq!(tree.path(b), "/a/b.txt");
        assert_eq!(tree.path(a), "/a");
    }

    #[test]
    fn test_path_with_named_root() {
        let mut tree = FsTree::new("home");
        let f = tree.create(ItemKind::File, "notes.md").unwrap();
        tree.add(tree.root(), f).unwrap();
        assert_eq!(tree.path(f), "home/notes.md");
    }

    #[test]
    fn test_ext_rules() {
        let mut tree = FsTree::new("");
        let cases = [
            ("report.tar.gz", "gz"),
            ("README", ""),
            (".gitignore", ""),
            ("archive.", ""),
            ("photo.JPG", "JPG"),
        ];
        for (name, expected) in cases {
            let id = tree.create(ItemKind::File, name).unwrap();
            assert_eq!(tree.ext(id), expected, "ext of {name:?}");
        }
    }

    #[test]
    fn test_rename() {
        let (mut tree, _, readme) = create_test_tree();
        tree.rename(readme, "  README.md ").unwrap();
        assert_eq!(tree.name(readme), "README.md");
        let err = tree.rename(readme, "  ").unwrap_err();
        assert!(matches!(err, FsError::InvalidArgument(_)));
    }

    #[test]
    fn test_parent_chain_terminates_at_root() {
        let (tree, docs, _) = create_test_tree();
        let guide = tree.children(docs)[0];
        assert_eq!(tree.parent(guide), Some(docs));
        assert_eq!(tree.parent(docs), Some(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
    }
}
