//! Document text extraction.
//!
//! One extractor per supported format. The external contract is forgiving:
//! an extractor never panics and never bubbles a decode error past this
//! module; any internal failure collapses to "no usable text". The failure
//! reason is kept so the pipeline can log *why* a document produced
//! nothing, even though all reasons map to the same caller-facing error.

pub mod docx;
pub mod pdf;
pub mod txt;

use thiserror::Error;

/// Internal result of one extraction attempt.
#[derive(Debug)]
pub enum Extraction {
    Success(String),
    Failure(ExtractionFailure),
}

/// Why an extraction produced no text. Logged, never surfaced verbatim.
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("could not read file: {0}")]
    Io(String),

    #[error("could not decode document: {0}")]
    Decode(String),

    #[error("document contained no text")]
    Empty,
}

impl Extraction {
    /// Collapses a successful-but-empty extraction into a failure so the
    /// pipeline sees a single "no usable text" signal.
    fn from_text(text: String) -> Self {
        if text.is_empty() {
            Extraction::Failure(ExtractionFailure::Empty)
        } else {
            Extraction::Success(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_collapses_to_failure() {
        assert!(matches!(
            Extraction::from_text(String::new()),
            Extraction::Failure(ExtractionFailure::Empty)
        ));
    }

    #[test]
    fn test_nonempty_text_is_success() {
        assert!(matches!(
            Extraction::from_text("hello".to_string()),
            Extraction::Success(_)
        ));
    }
}
