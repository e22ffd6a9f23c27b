//! In-memory output document and its `.docx` rendering.
//!
//! The document is an append-only list of [`Block`]s. Nothing touches the
//! filesystem until [`Document::save`], which writes the whole file at once.

use crate::error::SnapdocError;
use crate::sanitize::{chunks, sanitize};
use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use std::fs::{self, File};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Font applied to a run of code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFont {
    pub family: String,
    /// Size in points.
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    /// `None` for body text.
    pub font: Option<CodeFont>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<TextRun>),
    PageBreak,
}

#[derive(Debug, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Heading text is sanitized, since it usually carries file names.
    pub fn heading(&mut self, level: u8, text: impl AsRef<str>) {
        self.blocks.push(Block::Heading {
            level,
            text: sanitize(text.as_ref()),
        });
    }

    pub fn paragraph(&mut self, text: impl AsRef<str>) {
        self.blocks.push(Block::Paragraph(vec![TextRun {
            text: sanitize(text.as_ref()),
            font: None,
        }]));
    }

    pub fn blank(&mut self) {
        self.blocks.push(Block::Paragraph(Vec::new()));
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Appends `text` as one paragraph made of `chunk_size`-character runs in `font`.
    pub fn code_block(&mut self, text: &str, chunk_size: usize, font: &CodeFont) {
        let runs = chunks(text, chunk_size)
            .map(|chunk| TextRun {
                text: chunk.to_string(),
                font: Some(font.clone()),
            })
            .collect();
        self.blocks.push(Block::Paragraph(runs));
    }

    pub fn to_docx(&self) -> Docx {
        let mut docx = Docx::new()
            .add_style(heading_style(1, 32))
            .add_style(heading_style(2, 26))
            .add_style(heading_style(3, 24));
        for block in &self.blocks {
            let paragraph = match block {
                Block::Heading { level, text } => Paragraph::new()
                    .style(&format!("Heading{}", level))
                    .add_run(Run::new().add_text(text)),
                Block::Paragraph(runs) => runs
                    .iter()
                    .fold(Paragraph::new(), |p, run| p.add_run(docx_run(run))),
                Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            };
            docx = docx.add_paragraph(paragraph);
        }
        docx
    }

    /// Writes the document to `path`, creating parent directories first.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapdocError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SnapdocError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| SnapdocError::io(path, e))?;
        #[cfg(feature = "logging")]
        tracing::debug!("Packing {} blocks into {}", self.blocks.len(), path.display());
        self.to_docx()
            .build()
            .pack(file)
            .map_err(|e| SnapdocError::Save {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

fn heading_style(level: u8, half_points: usize) -> Style {
    Style::new(format!("Heading{}", level), StyleType::Paragraph)
        .name(format!("Heading {}", level))
        .size(half_points)
        .bold()
}

/// Newlines become line breaks and tabs become tab stops, as Word ignores both inside text.
fn docx_run(run: &TextRun) -> Run {
    let mut out = Run::new();
    if let Some(font) = &run.font {
        out = out
            .fonts(
                RunFonts::new()
                    .ascii(&font.family)
                    .hi_ansi(&font.family)
                    .cs(&font.family),
            )
            .size(font.size * 2);
    }
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                out = out.add_tab();
            }
            if !piece.is_empty() {
                out = out.add_text(piece);
            }
        }
    }
    out
}
