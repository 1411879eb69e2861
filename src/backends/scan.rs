//! Directory scanning backend
//!
//! Uses walkdir to index a root directory, pruning excluded directories
//! before they are descended into.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::ScanConfig;
use crate::core::model::{CollectedFile, DirectoryNode, TreeIndex};
use crate::core::paths::{join_normalized, make_relative, parent_key};

fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}

/// A link to a directory counts as a directory. Links are never followed,
/// so it is listed but not descended into.
fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Excluded directories are rejected here so walkdir never enters them.
/// The root (depth 0) is always kept.
fn is_pruned(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.depth() > 0 && is_dir_entry(entry) && config.is_excluded_dir(&entry_name(entry))
}

/// Build the tree index for a single root directory
pub fn build_tree(root: &Path, config: &ScanConfig) -> TreeIndex {
    let mut index = TreeIndex::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, config));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let relative = match make_relative(entry.path(), root) {
            Some(r) => r,
            None => {
                log::warn!(
                    "Could not get relative path for: {}",
                    entry.path().display()
                );
                continue;
            }
        };

        let is_dir = is_dir_entry(&entry);
        if is_dir {
            log::trace!("Indexing directory: {:?}", relative);
            index.insert(DirectoryNode::new(relative.clone()));
        }

        // The root has no parent to register with
        if entry.depth() == 0 {
            continue;
        }

        let name = entry_name(&entry);
        if !is_dir && config.is_excluded_file(&name) {
            log::trace!("Excluding file: {}", relative);
            continue;
        }

        // walkdir yields a directory before its contents, so the parent is present
        match index.get_mut(parent_key(&relative)) {
            Some(parent) if is_dir => {
                parent.subdirectories.insert(name);
            }
            Some(parent) => {
                parent.files.insert(name);
            }
            None => log::warn!("No parent indexed for: {}", relative),
        }
    }

    log::debug!(
        "Indexed {}: {} directories, {} files",
        root.display(),
        index.dir_count(),
        index.file_count()
    );
    index
}

/// Collect the files whose names end with the configured extension.
///
/// Paths are `root/relative_dir/name` with '/' separators, ordered by directory
/// key and then by file name.
pub fn collect_files(
    index: &TreeIndex,
    root: &Path,
    config: &ScanConfig,
) -> Vec<CollectedFile> {
    index
        .iter()
        .flat_map(|node| {
            node.files
                .iter()
                .filter(|name| config.is_target(name))
                .map(move |name| join_normalized(root, &node.relative_path, name))
        })
        .collect()
}
