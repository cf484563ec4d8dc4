//! Browser view model.
//!
//! [`ExplorerState`] orchestrates the tree model, the selection model
//! and the grid partition behind the file-browser view: it owns the
//! current directory, the active [`Selection`] over that directory's
//! children, and the set of expanded directories for the sidebar tree.
//!
//! The selection's universe is a frozen snapshot of `cwd`'s sorted
//! children; any operation that structurally invalidates that list
//! (navigation, attach, rename, deletion) discards the selection and
//! constructs a fresh one rather than patching indices in place.

use std::collections::HashSet;

use crate::core::error::FsError;
use crate::core::selection::{ClickModifiers, Selection};
use crate::core::tree::{FsTree, NodeId};
use crate::models::ItemKind;

/// State machine over `(cwd, selection, expanded)`.
#[derive(Clone, Debug)]
pub struct ExplorerState {
    tree: FsTree,
    cwd: NodeId,
    selection: Selection<NodeId>,
    expanded: HashSet<NodeId>,
}

impl ExplorerState {
    /// Construct a view model rooted at `tree`'s root directory.
    pub fn new(tree: FsTree) -> Self {
        let cwd = tree.root();
        let selection = Selection::new(tree.children(cwd));
        let mut expanded = HashSet::new();
        expanded.insert(cwd);
        Self {
            tree,
            cwd,
            selection,
            expanded,
        }
    }

    /// The underlying tree, read-only. All mutation goes through the
    /// operations below so the selection stays consistent.
    pub fn tree(&self) -> &FsTree {
        &self.tree
    }

    /// Current directory.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Sorted children of the current directory (fresh snapshot).
    pub fn children(&self) -> Vec<NodeId> {
        self.tree.children(self.cwd)
    }

    /// Children partitioned into fixed-size row groups for the grid.
    pub fn rows(&self, per_row: usize) -> Vec<Vec<NodeId>> {
        self.children()
            .chunks(per_row.max(1))
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    /// Ancestor chain of the current directory, root first, `cwd` last.
    pub fn ancestors(&self) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = Some(self.cwd);
        while let Some(node) = cursor {
            chain.push(node);
            cursor = self.tree.parent(node);
        }
        chain.reverse();
        chain
    }

    /// Change the current directory and scope a fresh selection to its
    /// children. Files and tombstoned directories are ignored.
    pub fn navigate(&mut self, dir: NodeId) {
        if !self.tree.is_dir(dir) || self.tree.is_deleted(dir) {
            return;
        }
        self.cwd = dir;
        self.refresh_selection();
    }

    /// Set or flip a directory's membership in the expanded set.
    pub fn toggle_expanded(&mut self, dir: NodeId, expanded: Option<bool>) {
        let target = expanded.unwrap_or(!self.expanded.contains(&dir));
        if target {
            self.expanded.insert(dir);
        } else {
            self.expanded.remove(&dir);
        }
    }

    /// Check whether an item is an expanded directory. Always false for
    /// files.
    pub fn expanded(&self, item: NodeId) -> bool {
        self.tree.is_dir(item) && self.expanded.contains(&item)
    }

    /// Item factory delegate. The result is unattached; attach it with
    /// [`ExplorerState::add`].
    pub fn create(&mut self, kind: ItemKind, name: &str) -> Result<NodeId, FsError> {
        self.tree.create(kind, name)
    }

    /// Attach an item to a directory. Attaching into the current
    /// directory changes the selection universe, as does moving an
    /// already-attached item out of it; the selection is rebuilt in
    /// either case.
    pub fn add(&mut self, dir: NodeId, item: NodeId) -> Result<NodeId, FsError> {
        let old_parent = self.tree.parent(item);
        let item = self.tree.add(dir, item)?;
        if dir == self.cwd || old_parent == Some(self.cwd) {
            self.refresh_selection();
        }
        Ok(item)
    }

    /// Rename an item. The sort position of the item moves with its
    /// name, so the selection is rebuilt.
    pub fn rename(&mut self, item: NodeId, name: &str) -> Result<(), FsError> {
        self.tree.rename(item, name)?;
        self.refresh_selection();
        Ok(())
    }

    /// Selection delegate: is `item` highlighted?
    pub fn selected(&self, item: NodeId) -> bool {
        self.selection.has(&item)
    }

    /// Route a pointer click on a grid item into the selection model.
    pub fn click(&mut self, item: NodeId, modifiers: ClickModifiers) {
        self.selection.click(&item, modifiers);
    }

    /// The active selection.
    pub fn selection(&self) -> &Selection<NodeId> {
        &self.selection
    }

    /// Deselect everything, e.g. on a click on empty grid space. The
    /// universe stays intact; only the selected set and anchor reset.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check that no direct child of `cwd` carries `name`.
    ///
    /// Linear scan by design; directory fan-out is assumed modest. Note
    /// this check and a later `add` are not atomic, so reentrant
    /// callers can still race a duplicate in.
    pub fn is_name_available(&self, name: &str) -> bool {
        !self
            .children()
            .into_iter()
            .any(|child| self.tree.name(child) == name)
    }

    /// Delete every selected item, then rebuild the selection over the
    /// surviving children.
    ///
    /// The selection is snapshotted up front and deletions are not
    /// topologically ordered: when a directory and one of its
    /// descendants are both selected, the descendant's delete runs
    /// after the ancestor's cascade has already removed it, which the
    /// tree model tolerates as a no-op. Calling this with an empty
    /// selection does nothing.
    pub fn delete_selection(&mut self) {
        for item in self.selection.items() {
            if let Some(parent) = self.tree.parent(item) {
                self.tree.delete(parent, item);
            }
        }
        self.expanded.retain(|dir| !self.tree.is_deleted(*dir));
        self.refresh_selection();
    }

    /// Discard the current selection and scope a new one to the current
    /// children. Committed together with the mutation that invalidated
    /// the universe, so views never observe the two out of sync.
    fn refresh_selection(&mut self) {
        self.selection = Selection::new(self.tree.children(self.cwd));
    }
}
