//! Source file enumeration with packaging exclusions.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

fn is_snapshot_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_str() == Some("__snapshots__")
}

fn is_excluded(root: &Path, path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if name == ".DS_Store" {
        return true;
    }
    if name.ends_with(".test.js") {
        return true;
    }

    // The packaged README is maintained separately from the source one.
    path == root.join("README.md")
}

/// Lazily enumerate the files to package under `root`.
///
/// Prunes `__snapshots__` subtrees entirely and skips OS metadata files,
/// JS test files, and the root README. The sequence is restartable by
/// calling again; traversal is read-only.
pub fn source_files(root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_snapshot_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(move |path| !is_excluded(root, path))
}
