//! Content warning profile generation and text screening

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use mq_taxonomy::catalog::AudienceType;
use mq_taxonomy::planning::{ContentWarningGenerator, ProfileRequest};
use mq_taxonomy::Taxonomy;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::resolve;
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /api/content-warnings/profile
///
/// The audience is resolved up front so an unknown one carries a suggestion.
pub async fn generate_profile(
    State(state): State<AppState>,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let audience: AudienceType = resolve(&state, &request.target_audience)?;
    let profile = ContentWarningGenerator::generate_profile(&request)?;
    info!(
        genre = %request.genre,
        audience = audience.key(),
        warnings = profile.warnings.len(),
        "Generated content warning profile"
    );
    Ok(Json(profile.to_dict()))
}

/// POST /api/content-warnings/analyze
pub async fn analyze_text(payload: Result<Json<AnalyzeRequest>, JsonRejection>) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let found: Vec<Value> = ContentWarningGenerator::analyze_text(&request.text)
        .into_iter()
        .map(|warning| warning.to_dict())
        .collect();
    Ok(Json(json!({ "warnings": found })))
}

pub fn content_warning_routes() -> Router<AppState> {
    Router::new()
        .route("/api/content-warnings/profile", post(generate_profile))
        .route("/api/content-warnings/analyze", post(analyze_text))
}
