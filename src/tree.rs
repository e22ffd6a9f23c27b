//! Internal module for building the indented tree outline from walk entries.

use crate::types::{TreeLine, WalkEntry};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Name shown for the root when it has no usable base name.
pub(crate) const ROOT_FALLBACK_LABEL: &str = "root";

/// Display name of the root directory.
///
/// Uses the base name of `root`, then of its canonical form (for `.` and
/// similar), and falls back to [`ROOT_FALLBACK_LABEL`] for drive roots.
pub(crate) fn root_label(root: &Path) -> String {
    let name = root.file_name().map(|n| n.to_string_lossy().into_owned());
    let name = name.or_else(|| {
        fs::canonicalize(root)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    });
    match name {
        Some(n) if !n.is_empty() => n,
        _ => ROOT_FALLBACK_LABEL.to_string(),
    }
}

/// Builds the outline from entries in walk (pre-order) order.
///
/// Each directory yields one line at its depth, followed by the files directly
/// inside it sorted by name one level deeper. The root entry is labelled with
/// `root_label`.
pub(crate) fn build_tree_from_entries(root_label: &str, entries: &[WalkEntry]) -> Vec<TreeLine> {
    let mut files_by_dir: HashMap<PathBuf, Vec<OsString>> = HashMap::new();
    for entry in entries.iter().filter(|e| !e.is_dir) {
        if let (Some(parent), Some(name)) = (entry.path.parent(), entry.path.file_name()) {
            files_by_dir
                .entry(parent.to_path_buf())
                .or_default()
                .push(name.to_os_string());
        }
    }

    let mut lines = Vec::new();
    for dir in entries.iter().filter(|e| e.is_dir) {
        let name = if dir.depth == 0 {
            root_label.to_string()
        } else {
            dir.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        };
        lines.push(TreeLine {
            depth: dir.depth,
            name,
            is_dir: true,
        });
        if let Some(mut files) = files_by_dir.remove(&dir.path) {
            files.sort();
            lines.extend(files.into_iter().map(|f| TreeLine {
                depth: dir.depth + 1,
                name: f.to_string_lossy().into_owned(),
                is_dir: false,
            }));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str, depth: usize) -> WalkEntry {
        WalkEntry {
            path: PathBuf::from(path),
            depth,
            is_dir: true,
        }
    }

    fn file(path: &str, depth: usize) -> WalkEntry {
        WalkEntry {
            path: PathBuf::from(path),
            depth,
            is_dir: false,
        }
    }

    #[test]
    fn files_follow_their_directory_sorted() {
        let entries = vec![
            dir("/p", 0),
            file("/p/z.txt", 1),
            dir("/p/a", 1),
            file("/p/a/y.js", 2),
            file("/p/a/b.js", 2),
            file("/p/m.md", 1),
        ];
        let rendered: Vec<String> = build_tree_from_entries("p", &entries)
            .iter()
            .map(TreeLine::render)
            .collect();
        assert_eq!(
            rendered,
            vec!["p/", "  m.md", "  z.txt", "  a/", "    b.js", "    y.js"]
        );
    }

    #[test]
    fn empty_root_still_has_a_line() {
        let lines = build_tree_from_entries("proj", &[dir("/proj", 0)]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].render(), "proj/");
    }

    #[test]
    fn label_uses_base_name() {
        assert_eq!(root_label(Path::new("/tmp/frontend")), "frontend");
    }

    #[test]
    fn label_falls_back_for_filesystem_root() {
        assert_eq!(root_label(Path::new("/")), ROOT_FALLBACK_LABEL);
    }
}
