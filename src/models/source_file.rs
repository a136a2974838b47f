use std::path::{Path, PathBuf};

use crate::models::object_id::ObjectId;

/// A discovered source file. Identity is the path; the base name and the
/// path relative to the scanned root are what the templates interpolate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as discovered on disk
    pub path: PathBuf,
    /// Base file name, e.g. "ContentView.swift"
    pub name: String,
    /// Path relative to the scanned source root, '/'-separated
    pub relative: String,
}

impl SourceFile {
    /// Create a record for `path`, computing its name and its path relative
    /// to `root`. Falls back to the full path when `path` is not under
    /// `root`.
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        Self { path, name, relative }
    }
}

/// A source file paired with the two identifiers it needs inside the
/// descriptor: one for its file reference and one for its membership in the
/// sources build phase.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub source: SourceFile,
    pub file_ref: ObjectId,
    pub build_file: ObjectId,
}

impl FileEntry {
    /// Pair each discovered file with freshly minted identifiers, preserving
    /// the discovery order.
    pub fn assign(files: Vec<SourceFile>) -> Vec<Self> {
        files
            .into_iter()
            .map(|source| Self {
                source,
                file_ref: ObjectId::mint(),
                build_file: ObjectId::mint(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_relative_path() {
        let root = Path::new("MyApp");
        let file = SourceFile::new(PathBuf::from("MyApp/Views/ContentView.swift"), root);

        assert_eq!(file.name, "ContentView.swift");
        assert_eq!(file.relative, "Views/ContentView.swift");
    }

    #[test]
    fn test_source_file_at_root() {
        let root = Path::new("MyApp");
        let file = SourceFile::new(PathBuf::from("MyApp/App.swift"), root);

        assert_eq!(file.name, "App.swift");
        assert_eq!(file.relative, "App.swift");
    }

    #[test]
    fn test_source_file_outside_root_keeps_full_path() {
        let root = Path::new("Other");
        let file = SourceFile::new(PathBuf::from("MyApp/App.swift"), root);

        assert_eq!(file.relative, "MyApp/App.swift");
    }

    #[test]
    fn test_assign_preserves_order_and_mints_distinct_ids() {
        let root = Path::new("MyApp");
        let files = vec![
            SourceFile::new(PathBuf::from("MyApp/A.swift"), root),
            SourceFile::new(PathBuf::from("MyApp/B.swift"), root),
        ];

        let entries = FileEntry::assign(files);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source.name, "A.swift");
        assert_eq!(entries[1].source.name, "B.swift");
        assert_ne!(entries[0].file_ref, entries[0].build_file);
        assert_ne!(entries[0].file_ref, entries[1].file_ref);
    }
}
