use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapdocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("Failed to load config {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("Failed to save document {path}: {message}")]
    Save { path: PathBuf, message: String },
}
impl SnapdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapdocError::Io {
            path: path.into(),
            source,
        }
    }
}
