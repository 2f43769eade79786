use std::path::Path;

use super::{Extraction, ExtractionFailure};

/// Extracts plain text from a PDF. Decode errors are absorbed into a
/// failure; the pipeline treats them the same as an empty document.
pub fn extract_text(path: &Path) -> Extraction {
    match pdf_extract::extract_text(path) {
        Ok(text) => Extraction::from_text(text),
        Err(e) => Extraction::Failure(ExtractionFailure::Decode(e.to_string())),
    }
}
