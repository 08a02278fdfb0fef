//! Text extraction for uploaded CVs.
//!
//! Supports PDF and DOCX. The format is chosen from the file name suffix
//! before any bytes are read; no OCR or layout preservation.

use std::path::Path;

use thiserror::Error;

pub mod docx;
pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks the format from the file name suffix, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(ExtractionError::UnsupportedFormat(file_name.to_string()))
        }
    }
}

/// Extracts plain text from the document at `path`.
/// Blocking; call from `spawn_blocking` inside async handlers.
pub fn extract(path: &Path, format: DocumentFormat) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(path),
        DocumentFormat::Docx => docx::extract_docx_text(path),
    }
}
