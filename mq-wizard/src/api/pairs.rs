//! Genre/subgenre combination endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use mq_taxonomy::catalog::genre_subgenre::{
    create_genre_subgenre_pair, search_combinations, subgenres_for, trending_combinations,
};
use mq_taxonomy::catalog::{GenreSubgenrePair, GenreType, SubGenreType, GENRE_SUBGENRES};
use mq_taxonomy::{MapStatistics, Taxonomy};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::resolve;
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct PairRequest {
    pub genre: String,
    pub subgenre: String,
}

#[derive(Debug, Deserialize)]
pub struct PairSearchParams {
    pub genre: Option<String>,
    #[serde(default)]
    pub ai_friendly: bool,
}

fn pair_list(pairs: &[GenreSubgenrePair]) -> Json<Value> {
    Json(Value::Array(pairs.iter().map(|pair| pair.to_dict()).collect()))
}

/// GET /api/genres/:genre/subgenres
pub async fn genre_subgenres(State(state): State<AppState>, Path(genre): Path<String>) -> ApiResult<Json<Value>> {
    let genre: GenreType = resolve(&state, &genre)?;
    let subgenres = subgenres_for(genre).into_iter().map(|s| s.to_dict()).collect();
    Ok(Json(Value::Array(subgenres)))
}

/// POST /api/pairs
///
/// Resolves both values from free text, then validates the combination.
pub async fn create_pair(
    State(state): State<AppState>,
    payload: Result<Json<PairRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let genre: GenreType = resolve(&state, &request.genre)?;
    let subgenre: SubGenreType = resolve(&state, &request.subgenre)?;
    let pair = create_genre_subgenre_pair(genre, subgenre)?;

    info!(pair = %pair, "Validated genre/subgenre pair");
    Ok(Json(pair.to_dict()))
}

/// GET /api/pairs?genre=&ai_friendly=
pub async fn search_pairs(
    State(state): State<AppState>,
    params: Result<Query<PairSearchParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(params) = params?;
    let genre = match params.genre.as_deref() {
        Some(text) => Some(resolve::<GenreType>(&state, text)?),
        None => None,
    };
    Ok(pair_list(&search_combinations(genre, params.ai_friendly)))
}

/// GET /api/pairs/trending
pub async fn trending_pairs() -> Json<Value> {
    pair_list(trending_combinations())
}

/// GET /api/pairs/statistics
pub async fn pair_statistics() -> Json<MapStatistics> {
    Json(GENRE_SUBGENRES.statistics())
}

pub fn pair_routes() -> Router<AppState> {
    Router::new()
        .route("/api/genres/:genre/subgenres", get(genre_subgenres))
        .route("/api/pairs", get(search_pairs).post(create_pair))
        .route("/api/pairs/trending", get(trending_pairs))
        .route("/api/pairs/statistics", get(pair_statistics))
}
