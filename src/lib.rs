//! # Snapdoc
//!
//! `snapdoc` walks a project directory, records its structure, and writes a single Word
//! (`.docx`) document holding an indented file tree followed by the contents of every
//! recognised source/text file.
//!
//! The run is one walk of the root: excluded directories are pruned before they are
//! entered, files are classified by extension, allowed files are read and sanitized, and
//! the document is assembled in memory and saved once at the end.
//!
//! # Features
//!
//! - `parallel`: Reads file contents on a Rayon pool. Document order is unaffected.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use snapdoc::{SnapdocBuilder, generate};
//!
//! let options = SnapdocBuilder::new("./frontend")
//!     .output("docs/frontend_documentation.docx")
//!     .exclude_dirs(vec!["node_modules".into(), "target".into()])
//!     .build();
//!
//! let report = generate(options).expect("Failed to write snapshot");
//! println!("Saved: {}", report.output.display());
//! ```

mod classify;
mod document;
mod engine;
mod error;
mod options;
mod sanitize;
mod tree;
mod types;

pub use classify::{classify, extension_of, is_allowed};
pub use document::{Block, CodeFont, Document, TextRun};
pub use engine::{FILES_HEADING, TREE_HEADING, default_output, generate, render, scan};
pub use error::SnapdocError;
pub use options::{
    BinaryDetection, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_CHUNK_SIZE, DEFAULT_CODE_FONT,
    DEFAULT_CODE_FONT_SIZE, DEFAULT_EXCLUDE_DIRS, SnapdocBuilder, SnapdocOptions,
    WalkErrorPolicy, normalize_extension,
};
pub use sanitize::{Chunks, chunks, sanitize};
pub use types::{FileContent, FileEntry, Report, SkipReason, Snapshot, TreeLine, WalkEntry};
