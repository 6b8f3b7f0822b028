//! Research plan generation

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use mq_taxonomy::planning::{PlanRequest, ResearchPlanGenerator};
use serde_json::Value;
use tracing::info;

use crate::{ApiResult, AppState};

/// POST /api/research/plan
pub async fn generate_plan(payload: Result<Json<PlanRequest>, JsonRejection>) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let plan = ResearchPlanGenerator::generate_plan(&request)?;
    info!(
        title = %plan.book_title,
        requirements = plan.requirements.len(),
        minutes = plan.total_estimated_time(),
        "Generated research plan"
    );
    Ok(Json(plan.to_dict()))
}

pub fn research_routes() -> Router<AppState> {
    Router::new().route("/api/research/plan", post(generate_plan))
}
