//! Text extraction — turns an uploaded document into one plain-text blob.
//!
//! `extract` is the only entry point. It picks the extractor from the
//! document's format tag, and formats outside the known set yield "".
//! Extractors never fail: decode errors are logged and whatever text was
//! recovered (possibly none) is returned.

pub mod docx;
pub mod pdf;
pub mod plain;

use std::path::Path;

use anyhow::{Context, Result};

/// Declared encoding of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    Unsupported,
}

impl DocumentFormat {
    /// Case-insensitive lookup from a format tag or file extension.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            "txt" | "text" | "plain-text" => DocumentFormat::PlainText,
            _ => DocumentFormat::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "plain-text",
            DocumentFormat::Unsupported => "unsupported",
        }
    }
}

/// Raw document content plus its declared format. Read-only to extraction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub format: DocumentFormat,
    pub content: Vec<u8>,
}

impl SourceDocument {
    pub fn new(format: DocumentFormat, content: impl Into<Vec<u8>>) -> Self {
        Self {
            format,
            content: content.into(),
        }
    }

    /// Reads a stored upload, taking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(DocumentFormat::from_tag)
            .unwrap_or(DocumentFormat::Unsupported);
        Ok(Self { format, content })
    }
}

/// Extracts the text of `document` with the extractor matching its format.
pub fn extract(document: &SourceDocument) -> String {
    tracing::debug!(
        format = document.format.as_str(),
        bytes = document.content.len(),
        "Extracting text"
    );
    match document.format {
        DocumentFormat::Pdf => pdf::extract_text(&document.content),
        DocumentFormat::Docx => docx::extract_text(&document.content),
        DocumentFormat::PlainText => plain::extract_text(&document.content),
        DocumentFormat::Unsupported => String::new(),
    }
}
