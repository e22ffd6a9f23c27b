use crate::classify::{classify, extension_of};
use crate::document::{CodeFont, Document};
use crate::error::SnapdocError;
use crate::options::{SnapdocOptions, WalkErrorPolicy};
use crate::tree::{build_tree_from_entries, root_label};
use crate::types::{FileContent, FileEntry, Report, Snapshot, WalkEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

pub const TREE_HEADING: &str = "Files Tree";
pub const FILES_HEADING: &str = "Files and Code";

struct Walker {
    inner: ignore::Walk,
    policy: WalkErrorPolicy,
}
impl Walker {
    fn new(options: &SnapdocOptions) -> Result<Self, SnapdocError> {
        let root = &options.root;
        let meta = fs::metadata(root).map_err(|e| SnapdocError::io(root, e))?;
        if !meta.is_dir() {
            return Err(SnapdocError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        fs::read_dir(root).map_err(|e| SnapdocError::io(root, e))?;
        let excluded = exclusion_set(&options.exclude_dirs)?;
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && entry.depth() > 0 && excluded.is_match(entry.file_name()))
        });
        Ok(Self {
            inner: builder.build(),
            policy: options.on_walk_error,
        })
    }

    /// Drains the walk, returning entries in pre-order plus any skipped errors.
    fn collect_entries(self) -> Result<(Vec<WalkEntry>, Vec<String>), SnapdocError> {
        let mut entries = Vec::new();
        let mut errors = Vec::new();
        for result in self.inner {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => match self.policy {
                    WalkErrorPolicy::Abort => return Err(SnapdocError::Walk(e.to_string())),
                    WalkErrorPolicy::Skip => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("Skipping unreadable entry: {}", e);
                        errors.push(e.to_string());
                        continue;
                    }
                },
            };
            let path = entry.path().to_path_buf();
            let is_dir = match entry.file_type() {
                Some(t) if t.is_dir() => true,
                Some(t) if t.is_symlink() && path.is_dir() => continue,
                _ => false,
            };
            entries.push(WalkEntry {
                path,
                depth: entry.depth(),
                is_dir,
            });
        }
        Ok((entries, errors))
    }
}

fn exclusion_set(names: &[String]) -> Result<GlobSet, SnapdocError> {
    let mut builder = GlobSetBuilder::new();
    for name in names {
        let glob = Glob::new(name).map_err(|e| {
            SnapdocError::InvalidOption(format!("Invalid exclude pattern '{}': {}", name, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| SnapdocError::InvalidOption(format!("Failed to build exclude set: {}", e)))
}

/// Walks `options.root` once and classifies every file found.
pub fn scan(options: &SnapdocOptions) -> Result<Snapshot, SnapdocError> {
    options.validate()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting snapdoc scan with root: {}", options.root.display());
    let (entries, walk_errors) = Walker::new(options)?.collect_entries()?;
    let root_label = root_label(&options.root);
    let tree = build_tree_from_entries(&root_label, &entries);

    let mut file_paths: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.path)
        .collect();
    file_paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    #[cfg(not(feature = "parallel"))]
    let files: Vec<FileEntry> = file_paths
        .iter()
        .map(|p| file_entry(p, options))
        .collect();
    #[cfg(feature = "parallel")]
    let files: Vec<FileEntry> = file_paths
        .par_iter()
        .map(|p| file_entry(p, options))
        .collect();

    Ok(Snapshot {
        root_label,
        tree,
        files,
        walk_errors,
    })
}

fn file_entry(path: &Path, options: &SnapdocOptions) -> FileEntry {
    let relative = path
        .strip_prefix(&options.root)
        .unwrap_or(path)
        .to_path_buf();
    FileEntry {
        path: path.to_path_buf(),
        relative,
        extension: extension_of(path),
        content: classify(path, options),
    }
}

/// Builds the document: title, tree section, page break, then one block per file.
pub fn render(snapshot: &Snapshot, options: &SnapdocOptions) -> Document {
    let mut doc = Document::new();
    doc.heading(1, title(snapshot, options));

    doc.heading(2, TREE_HEADING);
    for line in &snapshot.tree {
        doc.paragraph(line.render());
    }
    doc.page_break();

    doc.heading(2, FILES_HEADING);
    let font = CodeFont {
        family: options.code_font.clone(),
        size: options.code_font_size,
    };
    for file in &snapshot.files {
        let rel = file.relative.display();
        match &file.content {
            FileContent::Skipped(reason) => {
                doc.heading(3, format!("{} ({})", rel, reason.label()));
            }
            FileContent::Text(body) | FileContent::Unreadable(body) => {
                doc.heading(3, rel.to_string());
                doc.code_block(body, options.chunk_size, &font);
                doc.blank();
            }
        }
    }
    doc
}

fn title(snapshot: &Snapshot, options: &SnapdocOptions) -> String {
    options
        .title
        .clone()
        .unwrap_or_else(|| format!("{} - Files Tree and Code", snapshot.root_label))
}

/// Where [`generate`] writes when no output path is configured.
pub fn default_output(root_label: &str) -> PathBuf {
    PathBuf::from(format!("{}_documentation.docx", root_label))
}

/// Scans, renders and saves in one go.
pub fn generate(options: SnapdocOptions) -> Result<Report, SnapdocError> {
    let snapshot = scan(&options)?;
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output(&snapshot.root_label));
    render(&snapshot, &options).save(&output)?;

    let files_skipped = snapshot
        .files
        .iter()
        .filter(|f| f.content.is_skipped())
        .count();
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} files ({} skipped) to {}",
        snapshot.files.len() - files_skipped,
        files_skipped,
        output.display()
    );
    Ok(Report {
        output,
        files_written: snapshot.files.len() - files_skipped,
        files_skipped,
        walk_errors: snapshot.walk_errors,
    })
}
