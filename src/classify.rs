//! Extension-based classification and best-effort reading of file contents.

use crate::options::{BinaryDetection, SnapdocOptions, normalize_extension};
use crate::sanitize::sanitize;
use crate::types::{FileContent, SkipReason};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

const SNIFF_LEN: usize = 4096;

/// Lower-cased extension of `path`, or an empty string.
///
/// Follows [`Path::extension`], so a dotfile such as `.env` has no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| normalize_extension(&e.to_string_lossy()))
        .unwrap_or_default()
}

/// Whether `path` has an extension on `allow_list` (case-insensitive).
pub fn is_allowed(path: &Path, allow_list: &[String]) -> bool {
    let ext = extension_of(path);
    !ext.is_empty() && allow_list.iter().any(|a| normalize_extension(a) == ext)
}

/// Decides what goes into the document for `path`.
///
/// Files off the allow-list are never opened. Read failures become an
/// [`FileContent::Unreadable`] placeholder rather than an error.
pub fn classify(path: &Path, options: &SnapdocOptions) -> FileContent {
    if !is_allowed(path, &options.allowed_extensions) {
        return FileContent::Skipped(SkipReason::Extension);
    }
    match read_text(path, options) {
        Ok(content) => content,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Could not read {}: {}", path.display(), e);
            FileContent::Unreadable(sanitize(&format!("<<Could not read file: {}>>", e)))
        }
    }
}

fn read_text(path: &Path, options: &SnapdocOptions) -> std::io::Result<FileContent> {
    if let Some(limit) = options.file_size_limit {
        let len = fs::metadata(path)?.len();
        if len > limit {
            #[cfg(feature = "logging")]
            tracing::debug!("File too large ({} > {}), skipping content", len, limit);
            return Ok(FileContent::Skipped(SkipReason::TooLarge));
        }
    }
    let bytes = fs::read(path)?;
    if looks_binary(&bytes, options.binary_detection) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(FileContent::Skipped(SkipReason::Binary));
    }
    Ok(FileContent::Text(sanitize(&String::from_utf8_lossy(&bytes))))
}

fn looks_binary(bytes: &[u8], detection: BinaryDetection) -> bool {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    match detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_ALLOWED_EXTENSIONS;

    fn defaults() -> Vec<String> {
        DEFAULT_ALLOWED_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert!(is_allowed(Path::new("src/App.JS"), &defaults()));
        assert!(is_allowed(Path::new("README.Md"), &defaults()));
    }

    #[test]
    fn unknown_and_missing_extensions_are_not_allowed() {
        assert!(!is_allowed(Path::new("logo.png"), &defaults()));
        assert!(!is_allowed(Path::new("Makefile"), &defaults()));
        assert!(!is_allowed(Path::new(".env"), &defaults()));
        assert!(is_allowed(Path::new("prod.env"), &defaults()));
    }

    #[test]
    fn allow_list_accepts_dotted_entries() {
        let list = vec![".RS".to_string()];
        assert!(is_allowed(Path::new("main.rs"), &list));
    }

    #[test]
    fn binary_sniffing() {
        assert!(looks_binary(b"ab\0cd", BinaryDetection::Simple));
        assert!(!looks_binary(b"ab\0cd", BinaryDetection::None));
        assert!(!looks_binary(b"plain text", BinaryDetection::Accurate));
    }
}
