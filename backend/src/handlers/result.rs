//! HTTP handler for the transcript endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::TranscriptSummary;

use crate::error::{AppError, AppResult};
use crate::services::TranscriptService;
use crate::AppState;

/// Query parameters for `/result`
#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub student_id: Option<String>,
    /// Parsed by the handler so malformed values get the JSON error body
    pub defense_cgpa: Option<String>,
}

/// Parse the optional defense grade-point; a blank value counts as absent
pub fn parse_defense_cgpa(raw: Option<&str>) -> AppResult<Option<f64>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse::<f64>().map(Some).map_err(|_| {
            AppError::validation(
                "defense_cgpa",
                format!("defense_cgpa must be a number, got '{}'", v),
            )
        }),
    }
}

/// Compute a student's transcript from the upstream results API
pub async fn get_result(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> AppResult<Json<TranscriptSummary>> {
    let student_id = query
        .student_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation("student_id", "student_id is required"))?;

    let defense_cgpa = parse_defense_cgpa(query.defense_cgpa.as_deref())?;

    let service = TranscriptService::new(state.results_api.clone());
    let transcript = service
        .compute_transcript(student_id, defense_cgpa)
        .await?;
    Ok(Json(transcript))
}
