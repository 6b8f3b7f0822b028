//! Story structure and book length recommendations

use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use mq_taxonomy::planning::{LengthQuery, LengthRecommender, StructureQuery, StructureRecommender};
use serde_json::{json, Value};

use crate::{ApiResult, AppState};

/// POST /api/structures/recommend
pub async fn recommend(payload: Result<Json<StructureQuery>, JsonRejection>) -> ApiResult<Json<Value>> {
    let Json(query) = payload?;
    let recommendations: Vec<Value> = StructureRecommender::recommend(&query)?
        .iter()
        .map(|recommendation| recommendation.to_dict())
        .collect();
    Ok(Json(json!({
        "genre": query.genre,
        "recommendations": recommendations,
    })))
}

/// POST /api/lengths/recommend
pub async fn recommend_length(payload: Result<Json<LengthQuery>, JsonRejection>) -> ApiResult<Json<Value>> {
    let Json(query) = payload?;
    let recommendations: Vec<Value> = LengthRecommender::recommend(&query)?
        .iter()
        .map(|recommendation| recommendation.to_dict())
        .collect();
    Ok(Json(json!({
        "genre": query.genre,
        "target_audience": query.target_audience,
        "recommendations": recommendations,
    })))
}

pub fn structure_routes() -> Router<AppState> {
    Router::new()
        .route("/api/structures/recommend", post(recommend))
        .route("/api/lengths/recommend", post(recommend_length))
}
