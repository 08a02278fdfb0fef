use std::path::Path;

use crate::extraction::ExtractionError;

/// Returns the visible text of every page, concatenated in page order.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}
