//! Path normalization utilities
//!
//! Paths that reach the output or the tree index always use '/' as separator.
//! Only the host separator is rewritten: on Unix a backslash is an ordinary
//! name character and is kept as is.

use std::path::{Path, MAIN_SEPARATOR};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    let path = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        path.into_owned()
    } else {
        path.replace(MAIN_SEPARATOR, "/")
    }
}

/// Make a path relative to the root directory.
///
/// The key is built from the path's components joined with '/', so names are
/// never split or rewritten.
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(parts.join("/"))
}

/// Relative key of the directory containing `relative`, "" at the top level
pub fn parent_key(relative: &str) -> &str {
    relative
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .unwrap_or("")
}

/// Join a root, a relative directory key (possibly empty) and a file name into
/// a normalized path
pub fn join_normalized(root: &Path, relative_dir: &str, name: &str) -> String {
    let mut joined = normalize_path(root);
    for part in [relative_dir, name] {
        if part.is_empty() {
            continue;
        }
        if !joined.is_empty() && !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(part);
    }
    joined
}
