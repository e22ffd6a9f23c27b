//! Command-line interface for snapdoc.
//!
//! Walks a project directory and writes its file tree and source contents
//! into a single `.docx` document.

use clap::{Parser, ValueEnum};
use snapdoc::{
    BinaryDetection, SnapdocBuilder, SnapdocError, SnapdocOptions, WalkErrorPolicy, generate,
};
use std::path::PathBuf;
use std::process::exit;

/// snapdoc — project snapshot to Word document
#[derive(Parser)]
#[command(name = "snapdoc", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output document (default <root name>_documentation.docx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with options; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Top-level heading of the document
    #[arg(long)]
    title: Option<String>,

    /// Directory names or globs to prune (can be repeated, replaces the defaults)
    #[arg(short = 'x', long = "exclude")]
    exclude_dirs: Vec<String>,

    /// Extensions whose contents are included (can be repeated, replaces the defaults)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Characters per styled run
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Binary sniffing for allowed files
    #[arg(long, value_enum)]
    binary_detection: Option<Detection>,

    /// File size limit in bytes (larger files have their content omitted)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Honour .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Abort when a directory cannot be read instead of skipping it
    #[arg(long)]
    strict: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detection {
    None,
    Simple,
    Accurate,
}

impl From<Detection> for BinaryDetection {
    fn from(d: Detection) -> Self {
        match d {
            Detection::None => BinaryDetection::None,
            Detection::Simple => BinaryDetection::Simple,
            Detection::Accurate => BinaryDetection::Accurate,
        }
    }
}

impl Cli {
    fn into_options(self) -> Result<SnapdocOptions, SnapdocError> {
        let base = match &self.config {
            Some(path) => SnapdocOptions::from_json_file(path)?,
            None => SnapdocOptions::default(),
        };
        let mut builder = SnapdocBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if !self.exclude_dirs.is_empty() {
            builder = builder.exclude_dirs(self.exclude_dirs);
        }
        if !self.extensions.is_empty() {
            builder = builder.allowed_extensions(self.extensions);
        }
        if let Some(size) = self.chunk_size {
            builder = builder.chunk_size(size);
        }
        if let Some(detection) = self.binary_detection {
            builder = builder.binary_detection(detection.into());
        }
        if self.file_size_limit.is_some() {
            builder = builder.file_size_limit(self.file_size_limit);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        if self.strict {
            builder = builder.on_walk_error(WalkErrorPolicy::Abort);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let options = cli.into_options().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    println!("Walking {}", options.root.display());
    match generate(options) {
        Ok(report) => {
            for err in &report.walk_errors {
                eprintln!("Warning: skipped {}", err);
            }
            println!("Saved: {}", report.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
