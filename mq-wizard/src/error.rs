//! Error types for mq-wizard
//!
//! Taxonomy failures map onto HTTP statuses here; the core never sees
//! status codes.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mq_common::ResolutionConfig;
use mq_taxonomy::{Taxonomy, TaxonomyError};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown route parameter such as a taxonomy kind (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Body or query string the extractors could not decode (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resolution, validation or decoding failure from the taxonomy engine
    #[error("{source}")]
    Taxonomy {
        source: TaxonomyError,
        /// Closest valid key for an unknown value
        suggestion: Option<&'static str>,
    },
}

impl ApiError {
    /// Wrap a resolution failure for `T`, attaching a "did you mean" key
    /// when suggestions are enabled
    pub fn resolution<T: Taxonomy>(source: TaxonomyError, input: &str, config: &ResolutionConfig) -> Self {
        let suggestion = match source {
            TaxonomyError::UnknownValue { .. } if config.suggestions => T::resolver()
                .suggest(input, config.suggestion_threshold)
                .map(|value| value.key()),
            _ => None,
        };
        ApiError::Taxonomy { source, suggestion }
    }
}

impl From<TaxonomyError> for ApiError {
    fn from(source: TaxonomyError) -> Self {
        ApiError::Taxonomy {
            source,
            suggestion: None,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let mut detail = Map::new();

        let (status, error_code) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Taxonomy { source, suggestion } => match source {
                TaxonomyError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
                TaxonomyError::Malformed(_) => (StatusCode::BAD_REQUEST, "MALFORMED"),
                TaxonomyError::UnknownValue { sample, .. } => {
                    detail.insert("valid_sample".to_string(), json!(sample));
                    if let Some(key) = suggestion {
                        detail.insert("suggestion".to_string(), Value::from(key));
                    }
                    (StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_VALUE")
                }
                TaxonomyError::InvalidCombination { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_COMBINATION")
                }
            },
        };

        detail.insert("code".to_string(), Value::from(error_code));
        detail.insert("message".to_string(), Value::from(message));

        let body = Json(json!({ "error": detail }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
