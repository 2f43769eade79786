//! Pipeline orchestrator.
//!
//! One linear pass per document: extraction, normalization + matching,
//! scoring, classification, result assembly. Each invocation owns its own
//! intermediate values; the only shared input is the read-only vocabulary.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::classify::Suitability;
use crate::analysis::matcher::extract_skills;
use crate::analysis::scoring;
use crate::analysis::vocabulary::SkillVocabulary;
use crate::errors::AppError;
use crate::extract::{docx, pdf, txt, Extraction};

/// Number of characters of raw extracted text echoed back to the caller.
const PREVIEW_CHARS: usize = 200;

/// Document format, decided once from the file extension (case-insensitive)
/// and then matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
    Unsupported,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") | Some("doc") => DocumentKind::Docx,
            Some("txt") => DocumentKind::Txt,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Result payload for one analyzed resume.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub text_preview: String,
    pub skills: Vec<String>,
    pub score: f64,
    pub classification: Suitability,
}

/// Runs the full pipeline for one document. Unsupported formats fail before
/// any extraction attempt; an extractor that produces no text fails with a
/// distinct signal. Everything past extraction is pure computation.
pub fn analyze(
    path: &Path,
    requirements: &[String],
    vocabulary: &SkillVocabulary,
) -> Result<AnalysisReport, AppError> {
    let extraction = match DocumentKind::from_path(path) {
        DocumentKind::Pdf => pdf::extract_text(path),
        DocumentKind::Docx => docx::extract_text(path),
        DocumentKind::Txt => txt::extract_text(path),
        DocumentKind::Unsupported => {
            return Err(AppError::UnsupportedFormat(
                "Unsupported file format".to_string(),
            ))
        }
    };

    let text = match extraction {
        Extraction::Success(text) => text,
        Extraction::Failure(reason) => {
            warn!(path = %path.display(), %reason, "extraction produced no usable text");
            return Err(AppError::ExtractionFailed(
                "Could not extract text from file".to_string(),
            ));
        }
    };

    let matched = extract_skills(&text, requirements, vocabulary);
    let score = scoring::score(&matched, requirements);
    let classification = Suitability::from_score(score);
    debug!(skills = matched.len(), score, "resume analyzed");

    Ok(AnalysisReport {
        text_preview: preview(&text),
        skills: matched.into_iter().collect(),
        score,
        classification,
    })
}

/// First `PREVIEW_CHARS` characters of the raw text, always followed by the
/// truncation marker, even when the text is shorter.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}
