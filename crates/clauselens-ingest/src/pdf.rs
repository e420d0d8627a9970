//! PDF text extraction.
//!
//! Parse failures degrade to the empty string rather than surfacing an
//! error: the analysis pipeline treats empty text as valid input that yields
//! an all-empty report, and the boundary is not expected to distinguish
//! "unparseable PDF" from "PDF with no text layer". IO failures (missing or
//! unreadable file) do surface, since there is no document to degrade over.

use std::path::Path;

use clauselens_core::Result;

/// Extract plain text from PDF bytes. Returns the empty string if the
/// document cannot be parsed.
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("PDF extraction failed: {}", e);
            String::new()
        }
    }
}

/// Extract plain text from a PDF on disk. Same degrade-to-empty policy as
/// [`extract_text`] for parse failures; read failures are errors.
pub fn extract_text_from_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(extract_text(&bytes))
}
