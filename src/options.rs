use crate::error::SnapdocError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names pruned from the walk unless overridden.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".expo", "android", "ios", "__pycache__"];

/// Extensions whose contents are written into the document unless overridden.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    "js", "json", "md", "txt", "mjs", "jsx", "ts", "tsx", "html", "css", "env", "py", "jsonc",
];

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CODE_FONT: &str = "Courier New";
pub const DEFAULT_CODE_FONT_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}

/// What to do when a directory below the root cannot be enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkErrorPolicy {
    /// Record the error in the snapshot and keep walking.
    Skip,
    /// Stop the run with [`SnapdocError::Walk`].
    Abort,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapdocOptions {
    pub root: PathBuf,
    /// Output document. `None` means `<root name>_documentation.docx`.
    pub output: Option<PathBuf>,
    /// Top-level heading. `None` means `<root name> - Files Tree and Code`.
    pub title: Option<String>,
    pub exclude_dirs: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub chunk_size: usize,
    pub code_font: String,
    /// Point size of the code runs.
    pub code_font_size: usize,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
    pub file_size_limit: Option<u64>,
    pub on_walk_error: WalkErrorPolicy,
}
impl Default for SnapdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            title: None,
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            code_font: DEFAULT_CODE_FONT.to_string(),
            code_font_size: DEFAULT_CODE_FONT_SIZE,
            respect_gitignore: false,
            follow_links: false,
            binary_detection: BinaryDetection::None,
            file_size_limit: None,
            on_walk_error: WalkErrorPolicy::Skip,
        }
    }
}
impl SnapdocOptions {
    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SnapdocError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| SnapdocError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| SnapdocError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub(crate) fn validate(&self) -> Result<(), SnapdocError> {
        if self.chunk_size == 0 {
            return Err(SnapdocError::InvalidOption(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.code_font_size == 0 {
            return Err(SnapdocError::InvalidOption(
                "code_font_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lower-cases an extension and strips a leading dot, so `".JS"` and `"js"` compare equal.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

#[derive(Debug, Default)]
pub struct SnapdocBuilder {
    options: SnapdocOptions,
}
impl SnapdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: SnapdocOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.exclude_dirs = names;
        self
    }
    pub fn allowed_extensions(mut self, exts: Vec<String>) -> Self {
        self.options.allowed_extensions = exts.iter().map(|e| normalize_extension(e)).collect();
        self
    }
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.options.chunk_size = size;
        self
    }
    pub fn code_font(mut self, font: impl Into<String>, size: usize) -> Self {
        self.options.code_font = font.into();
        self.options.code_font_size = size;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn on_walk_error(mut self, policy: WalkErrorPolicy) -> Self {
        self.options.on_walk_error = policy;
        self
    }
    pub fn build(self) -> SnapdocOptions {
        self.options
    }
}
