use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry produced by the directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Number of path components between the entry and the root. The root is 0.
    pub depth: usize,
    pub is_dir: bool,
}

/// A single line of the rendered file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub is_dir: bool,
}

impl TreeLine {
    /// Two spaces per level, directories suffixed with `/`.
    pub fn render(&self) -> String {
        let mut line = "  ".repeat(self.depth);
        line.push_str(&self.name);
        if self.is_dir {
            line.push('/');
        }
        line
    }
}

/// Why a file's contents were left out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Extension is not on the allow-list.
    Extension,
    /// Allowed extension, but the bytes look binary.
    Binary,
    /// Larger than the configured size limit.
    TooLarge,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::Extension | SkipReason::Binary => "skipped - binary/asset",
            SkipReason::TooLarge => "skipped - too large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FileContent {
    Skipped(SkipReason),
    /// Sanitized text.
    Text(String),
    /// Sanitized placeholder standing in for a file that could not be read.
    Unreadable(String),
}

impl FileContent {
    pub fn is_skipped(&self) -> bool {
        matches!(self, FileContent::Skipped(_))
    }
}

/// A file found under the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// Path relative to the root, used as the heading in the document.
    pub relative: PathBuf,
    /// Lower-cased extension without the dot; empty when there is none.
    pub extension: String,
    pub content: FileContent,
}

/// Everything collected from one walk of the root.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display name of the root directory.
    pub root_label: String,
    pub tree: Vec<TreeLine>,
    /// Files in sorted full-path order.
    pub files: Vec<FileEntry>,
    /// Enumeration errors that were skipped over.
    pub walk_errors: Vec<String>,
}

impl Snapshot {
    /// The tree as text, one line per entry.
    pub fn tree_text(&self) -> String {
        self.tree
            .iter()
            .map(TreeLine::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Summary of a completed [`generate`](crate::generate) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub output: PathBuf,
    pub files_written: usize,
    pub files_skipped: usize,
    pub walk_errors: Vec<String>,
}
