//! Tree model
//!
//! A scan of one root directory produces a [`TreeIndex`]: one [`DirectoryNode`]
//! per visited directory, keyed by its path relative to the root.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Key of the root directory inside a [`TreeIndex`]
pub const ROOT_KEY: &str = "";

/// A normalized ('/'-separated) path of a file selected for dumping
pub type CollectedFile = String;

/// Immediate children of one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Path relative to the scan root, '/'-separated, empty for the root
    pub relative_path: String,

    /// Names of child directories that survived exclusion
    pub subdirectories: BTreeSet<String>,

    /// Names of child files that survived exclusion
    pub files: BTreeSet<String>,
}

impl DirectoryNode {
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            subdirectories: BTreeSet::new(),
            files: BTreeSet::new(),
        }
    }

    /// Relative path of a child directory of this node
    pub fn child_path(&self, name: &str) -> String {
        if self.relative_path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.relative_path, name)
        }
    }
}

/// Every directory reachable from a scan root, keyed by relative path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeIndex {
    nodes: BTreeMap<String, DirectoryNode>,
}

impl TreeIndex {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, node: DirectoryNode) {
        self.nodes.insert(node.relative_path.clone(), node);
    }

    pub fn get(&self, relative_path: &str) -> Option<&DirectoryNode> {
        self.nodes.get(relative_path)
    }

    pub fn get_mut(&mut self, relative_path: &str) -> Option<&mut DirectoryNode> {
        self.nodes.get_mut(relative_path)
    }

    /// The node of the scan root itself
    pub fn root(&self) -> Option<&DirectoryNode> {
        self.get(ROOT_KEY)
    }

    /// Nodes in ascending key order
    pub fn iter(&self) -> btree_map::Values<'_, String, DirectoryNode> {
        self.nodes.values()
    }

    /// Number of indexed directories, the root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Directories below the root
    pub fn dir_count(&self) -> usize {
        self.iter().map(|node| node.subdirectories.len()).sum()
    }

    pub fn file_count(&self) -> usize {
        self.iter().map(|node| node.files.len()).sum()
    }
}

/// Failures that are reported and skipped rather than aborting the run
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Directory '{root}' does not exist.")]
    MissingRoot { root: String },

    #[error("Error reading file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DumpError {
    pub fn missing_root(root: impl Into<String>) -> Self {
        DumpError::MissingRoot { root: root.into() }
    }

    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        DumpError::FileRead {
            path: path.into(),
            source,
        }
    }
}
