use std::path::Path;
use walkdir::WalkDir;

use crate::models::SourceFile;
use crate::utils::error::{Result, XcgenError};

/// Recursively discover source files under `root` whose extension matches
/// `extension` (without the dot). The result is sorted lexicographically by
/// path so repeated runs over an unchanged tree produce identical output.
pub fn discover_sources(root: &Path, extension: &str) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(XcgenError::ValidationError(format!(
            "source directory '{}' not found",
            root.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| XcgenError::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension);
        if matches {
            paths.push(entry.into_path());
        }
    }

    paths.sort();

    Ok(paths
        .into_iter()
        .map(|p| SourceFile::new(p, root))
        .collect())
}
