//! Source file reading
//!
//! Every failure (missing file, permissions, invalid UTF-8) becomes a
//! [`DumpError::FileRead`] so the caller can report it and move on.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::model::DumpError;

/// Read the full UTF-8 contents of a collected file, resolved against `base`.
///
/// Errors name `file` as collected, not the resolved path. The handle is
/// dropped before returning on both the success and the failure path.
pub fn read_source(base: &Path, file: &str) -> Result<String, DumpError> {
    read_utf8(&base.join(file)).map_err(|e| DumpError::file_read(file, e))
}

fn read_utf8(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}
