//! Synthetic demo filesystem.
//!
//! The tree is seeded in memory for demonstration only; nothing is
//! persisted or reloaded. Name pools and size bounds live in
//! [`config::seed`](crate::config::seed).

use rand::Rng;

use crate::config::seed;
use crate::core::tree::{FsTree, NodeId};
use crate::models::ItemKind;

/// Build a randomized demo tree.
///
/// Every top-level directory gets a handful of files and up to two
/// nested directories; one directory ([`seed::BULK_DIR`]) is padded
/// with a few hundred files so grid virtualization has something to
/// chew on. Seeded names carry a numeric suffix, so uniqueness within
/// a directory holds by construction.
pub fn demo_tree<R: Rng>(rng: &mut R) -> FsTree {
    let mut tree = FsTree::new(seed::ROOT_NAME);
    let root = tree.root();

    for dir_name in seed::TOP_DIRS {
        let dir = attach(&mut tree, root, ItemKind::Directory, dir_name);

        let file_count = if *dir_name == seed::BULK_DIR {
            seed::BULK_FILE_COUNT
        } else {
            rng.gen_range(seed::FILES_PER_DIR.0..=seed::FILES_PER_DIR.1)
        };
        seed_files(&mut tree, dir, file_count, rng);

        let subdir_count = rng.gen_range(seed::SUBDIRS_PER_DIR.0..=seed::SUBDIRS_PER_DIR.1);
        for sub_name in seed::SUB_DIRS.iter().take(subdir_count) {
            let sub = attach(&mut tree, dir, ItemKind::Directory, sub_name);
            let nested = rng.gen_range(seed::FILES_PER_DIR.0..=seed::FILES_PER_DIR.1);
            seed_files(&mut tree, sub, nested, rng);
        }
    }

    seed_files(&mut tree, root, rng.gen_range(2..=4), rng);
    tree
}

fn seed_files<R: Rng>(tree: &mut FsTree, dir: NodeId, count: usize, rng: &mut R) {
    for i in 0..count {
        let stem = seed::FILE_STEMS[rng.gen_range(0..seed::FILE_STEMS.len())];
        let ext = seed::FILE_EXTS[rng.gen_range(0..seed::FILE_EXTS.len())];
        let name = format!("{stem}-{i:03}.{ext}");
        attach(tree, dir, ItemKind::File, &name);
    }
}

fn attach(tree: &mut FsTree, dir: NodeId, kind: ItemKind, name: &str) -> NodeId {
    let item = tree
        .create(kind, name)
        .expect("seed names are non-empty");
    tree.add(dir, item)
        .expect("seed directories are never tombstoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_demo_tree_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let tree = demo_tree(&mut rng);
        let root = tree.root();

        let names: Vec<_> = tree
            .children(root)
            .into_iter()
            .map(|c| tree.name(c).to_string())
            .collect();
        for dir in seed::TOP_DIRS {
            assert!(names.contains(&dir.to_string()), "missing {dir}");
        }
    }

    #[test]
    fn test_bulk_directory_is_large() {
        let mut rng = StdRng::seed_from_u64(7);
        let tree = demo_tree(&mut rng);
        let bulk = tree
            .children(tree.root())
            .into_iter()
            .find(|c| tree.name(*c) == seed::BULK_DIR)
            .expect("bulk dir should be seeded");
        assert!(tree.children(bulk).len() >= seed::BULK_FILE_COUNT);
    }

    #[test]
    fn test_names_unique_within_each_directory() {
        let mut rng = StdRng::seed_from_u64(42);
        let tree = demo_tree(&mut rng);
        let mut stack = vec![tree.root()];
        while let Some(dir) = stack.pop() {
            let children = tree.children(dir);
            let mut names: Vec<_> = children.iter().map(|c| tree.name(*c)).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), children.len());
            stack.extend(children.into_iter().filter(|c| tree.is_dir(*c)));
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let ta = demo_tree(&mut a);
        let tb = demo_tree(&mut b);
        let na: Vec<_> = ta
            .children(ta.root())
            .into_iter()
            .map(|c| ta.name(c).to_string())
            .collect();
        let nb: Vec<_> = tb
            .children(tb.root())
            .into_iter()
            .map(|c| tb.name(c).to_string())
            .collect();
        assert_eq!(na, nb);
    }
}
