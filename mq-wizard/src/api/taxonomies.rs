//! Taxonomy listing and free-text resolution
//!
//! GET /api/taxonomies, GET /api/taxonomies/:kind,
//! GET /api/taxonomies/:kind/resolve?value=

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use mq_taxonomy::catalog::{
    AudienceType, BookLength, CharacterArchetype, CharacterRole, ContentWarning, GenreType, PlotType, ResearchType,
    StoryStructure, SubGenreType, WarningCategory, WorldType,
};
use mq_taxonomy::{normalize, Taxonomy};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{ApiError, ApiResult, AppState};

/// Taxonomies served under `/api/taxonomies/:kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Genre,
    Subgenre,
    ContentWarning,
    WarningCategory,
    ResearchType,
    StoryStructure,
    CharacterRole,
    CharacterArchetype,
    WorldType,
    Plot,
    Audience,
    BookLength,
}

impl TaxonomyKind {
    pub const ALL: [TaxonomyKind; 12] = [
        TaxonomyKind::Genre,
        TaxonomyKind::Subgenre,
        TaxonomyKind::ContentWarning,
        TaxonomyKind::WarningCategory,
        TaxonomyKind::ResearchType,
        TaxonomyKind::StoryStructure,
        TaxonomyKind::CharacterRole,
        TaxonomyKind::CharacterArchetype,
        TaxonomyKind::WorldType,
        TaxonomyKind::Plot,
        TaxonomyKind::Audience,
        TaxonomyKind::BookLength,
    ];

    /// Path segment
    pub fn slug(self) -> &'static str {
        match self {
            TaxonomyKind::Genre => "genres",
            TaxonomyKind::Subgenre => "subgenres",
            TaxonomyKind::ContentWarning => "content-warnings",
            TaxonomyKind::WarningCategory => "warning-categories",
            TaxonomyKind::ResearchType => "research-types",
            TaxonomyKind::StoryStructure => "story-structures",
            TaxonomyKind::CharacterRole => "character-roles",
            TaxonomyKind::CharacterArchetype => "character-archetypes",
            TaxonomyKind::WorldType => "world-types",
            TaxonomyKind::Plot => "plots",
            TaxonomyKind::Audience => "audiences",
            TaxonomyKind::BookLength => "book-lengths",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// Run a generic function with the enumeration behind a kind
macro_rules! dispatch {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            TaxonomyKind::Genre => $func::<GenreType>($($arg),*),
            TaxonomyKind::Subgenre => $func::<SubGenreType>($($arg),*),
            TaxonomyKind::ContentWarning => $func::<ContentWarning>($($arg),*),
            TaxonomyKind::WarningCategory => $func::<WarningCategory>($($arg),*),
            TaxonomyKind::ResearchType => $func::<ResearchType>($($arg),*),
            TaxonomyKind::StoryStructure => $func::<StoryStructure>($($arg),*),
            TaxonomyKind::CharacterRole => $func::<CharacterRole>($($arg),*),
            TaxonomyKind::CharacterArchetype => $func::<CharacterArchetype>($($arg),*),
            TaxonomyKind::WorldType => $func::<WorldType>($($arg),*),
            TaxonomyKind::Plot => $func::<PlotType>($($arg),*),
            TaxonomyKind::Audience => $func::<AudienceType>($($arg),*),
            TaxonomyKind::BookLength => $func::<BookLength>($($arg),*),
        }
    };
}

fn kind_from_path(slug: &str) -> ApiResult<TaxonomyKind> {
    TaxonomyKind::from_slug(slug).ok_or_else(|| ApiError::NotFound(format!("taxonomy '{slug}'")))
}

fn summary<T: Taxonomy>(kind: TaxonomyKind) -> Value {
    json!({
        "kind": kind.slug(),
        "name": T::KIND,
        "count": T::all().len(),
    })
}

fn values<T: Taxonomy>() -> Value {
    Value::Array(T::all().iter().map(|value| value.to_dict()).collect())
}

fn resolve_value<T: Taxonomy>(state: &AppState, kind: TaxonomyKind, input: &str) -> ApiResult<Value> {
    let (value, step) = T::resolver()
        .resolve_with_step(input)
        .map_err(|err| ApiError::resolution::<T>(err, input, &state.config.resolution))?;

    Ok(json!({
        "kind": kind.slug(),
        "input": input,
        "normalized": normalize(input),
        "matched_by": step.label(),
        "value": value.to_dict(),
    }))
}

/// GET /api/taxonomies
pub async fn list_taxonomies() -> Json<Value> {
    let kinds: Vec<Value> = TaxonomyKind::ALL
        .into_iter()
        .map(|kind| dispatch!(kind, summary(kind)))
        .collect();
    Json(Value::Array(kinds))
}

/// GET /api/taxonomies/:kind
pub async fn list_values(Path(slug): Path<String>) -> ApiResult<Json<Value>> {
    let kind = kind_from_path(&slug)?;
    Ok(Json(dispatch!(kind, values())))
}

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub value: String,
}

/// GET /api/taxonomies/:kind/resolve?value=
pub async fn resolve_text(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Result<Query<ResolveParams>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let kind = kind_from_path(&slug)?;
    let Query(params) = params?;
    debug!(kind = kind.slug(), input = %params.value, "Resolve request");
    let resolved = dispatch!(kind, resolve_value(&state, kind, &params.value))?;
    Ok(Json(resolved))
}

pub fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route("/api/taxonomies", get(list_taxonomies))
        .route("/api/taxonomies/:kind", get(list_values))
        .route("/api/taxonomies/:kind/resolve", get(resolve_text))
}
