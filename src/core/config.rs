//! Scan configuration
//!
//! The root list, exclusion sets and target extension are fixed for every run.
//! They are gathered in [`ScanConfig`] so each component receives them
//! explicitly instead of reading process-wide constants.

use serde::Serialize;
use std::collections::BTreeSet;

/// Root directories scanned on every run, in output order
pub const DEFAULT_ROOTS: &[&str] = &["app", "components", "data", "hooks", "types"];

/// Directory names that are never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["ui"];

/// File names that are never recorded
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["layout.tsx", "globals.tsx", "globals.css"];

/// Suffix a file name must end with to have its contents dumped
pub const DEFAULT_TARGET_EXTENSION: &str = ".tsx";

/// Width of the dash line printed after each dumped file
pub const SEPARATOR_WIDTH: usize = 80;

/// Printed once after the file dump, whatever came before it. The padding
/// lines of ten spaces are part of the block.
pub const TRAILER: &str = concat!(
    "\n",
    "          \n",
    "Understand all the code.\n",
    "After you understand the code response with \"UNDERSTOOD\"\n",
    "When ever I ask you to code something. You respond with the full code.\n",
    "Also to clarify, when I say show full code, only show the full code to the files that were updated.\n",
    "          ",
);

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanConfig {
    /// Root directories, relative to the working directory
    pub roots: Vec<String>,

    /// Directory names pruned during traversal
    pub excluded_dirs: BTreeSet<String>,

    /// File names dropped during traversal
    pub excluded_files: BTreeSet<String>,

    /// Suffix selecting the files whose contents are dumped
    pub target_extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_files: DEFAULT_EXCLUDED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name)
    }

    /// Whether a file's contents belong in the dump
    pub fn is_target(&self, name: &str) -> bool {
        name.ends_with(&self.target_extension)
    }
}
