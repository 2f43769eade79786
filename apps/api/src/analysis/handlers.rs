use axum::{extract::State, Json};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::analysis::pipeline::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if req.file_path.is_empty() {
        return Err(AppError::Validation("No file path provided".to_string()));
    }
    if !Path::new(&req.file_path).exists() {
        return Err(AppError::NotFound(format!(
            "File not found: {}",
            req.file_path
        )));
    }

    // Extraction is blocking file IO plus CPU-bound decoding; keep it off
    // the async runtime. A panic in the task lands here as a join error
    // instead of escaping the handler.
    let vocabulary = state.vocabulary.clone();
    let ParseRequest {
        file_path,
        requirements,
    } = req;
    let report = tokio::task::spawn_blocking(move || {
        analyze(Path::new(&file_path), &requirements, &vocabulary)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))??;

    info!(score = report.score, skills = report.skills.len(), "resume parsed");
    Ok(Json(report))
}
