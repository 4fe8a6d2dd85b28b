//! Schema source loading
//!
//! The thin I/O edge of the system: discover `.xsd` files and read them as
//! UTF-8 text. Everything past this point operates on in-memory strings.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Discover schema sources under a path.
///
/// A file path is returned as-is when it has the `.xsd` extension; a
/// directory is walked recursively. Results are sorted so batch runs are
/// deterministic regardless of directory iteration order.
pub fn discover_xsd_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_xsd_files(path, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_xsd_files(path: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_dir() {
        for entry in fs::read_dir(path).map_err(|e| {
            Error::Resource(format!("Failed to read directory '{}': {}", path.display(), e))
        })? {
            let entry = entry.map_err(|e| {
                Error::Resource(format!("Failed to read directory '{}': {}", path.display(), e))
            })?;
            collect_xsd_files(&entry.path(), found)?;
        }
    } else if path.extension().and_then(|e| e.to_str()) == Some("xsd") {
        found.push(path.to_path_buf());
    }
    Ok(())
}

/// Read a schema source as a UTF-8 string
pub fn load_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Resource(format!("Failed to read file '{}': {}", path.display(), e)))
}
