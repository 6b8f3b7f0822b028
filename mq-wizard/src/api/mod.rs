//! HTTP API handlers for mq-wizard

pub mod content_warnings;
pub mod health;
pub mod pairs;
pub mod research;
pub mod structures;
pub mod taxonomies;

pub use content_warnings::content_warning_routes;
pub use health::health_routes;
pub use pairs::pair_routes;
pub use research::research_routes;
pub use structures::structure_routes;
pub use taxonomies::taxonomy_routes;

use crate::{ApiError, ApiResult, AppState};
use mq_taxonomy::Taxonomy;

/// Resolve free text for `T`, attaching a suggestion on failure
pub(crate) fn resolve<T: Taxonomy>(state: &AppState, input: &str) -> ApiResult<T> {
    T::resolve(input).map_err(|err| ApiError::resolution::<T>(err, input, &state.config.resolution))
}
