//! Error types for taxonomy resolution and composite records

use thiserror::Error;

/// Result type for taxonomy operations
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Failures raised by resolvers, cross-taxonomy maps and record decoding
///
/// The core never recovers from these; callers decide whether to re-prompt,
/// fall back to a default or surface them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaxonomyError {
    /// Empty or whitespace-only input, or an unrecognized request parameter
    #[error("Invalid {kind} value: '{input}'")]
    InvalidInput { kind: &'static str, input: String },

    /// Input matched no canonical key, alias or rule
    ///
    /// `sample` is a bounded, alphabetized list of valid keys for diagnostics.
    #[error("Unknown {kind}: '{input}'. Available values include: {}", .sample.join(", "))]
    UnknownValue {
        kind: &'static str,
        input: String,
        sample: Vec<&'static str>,
    },

    /// The pair is not present in the cross-taxonomy map
    #[error("Invalid {first_kind}/{second_kind} combination: '{second}' is not valid for '{first}'")]
    InvalidCombination {
        first_kind: &'static str,
        first: &'static str,
        second_kind: &'static str,
        second: &'static str,
    },

    /// A serialized profile or plan could not be decoded
    #[error("Malformed record: {0}")]
    Malformed(String),
}

impl TaxonomyError {
    /// Kind label of the taxonomy involved, when there is one
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            TaxonomyError::InvalidInput { kind, .. } | TaxonomyError::UnknownValue { kind, .. } => {
                Some(kind)
            }
            TaxonomyError::InvalidCombination { first_kind, .. } => Some(first_kind),
            TaxonomyError::Malformed(_) => None,
        }
    }
}

impl From<serde_json::Error> for TaxonomyError {
    fn from(err: serde_json::Error) -> Self {
        TaxonomyError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_value_message_lists_sample() {
        let err = TaxonomyError::UnknownValue {
            kind: "genre",
            input: "xyz".to_string(),
            sample: vec!["fantasy", "romance"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown genre: 'xyz'. Available values include: fantasy, romance"
        );
        assert_eq!(err.kind(), Some("genre"));
    }

    #[test]
    fn test_invalid_combination_message() {
        let err = TaxonomyError::InvalidCombination {
            first_kind: "genre",
            first: "romance",
            second_kind: "subgenre",
            second: "space_opera",
        };
        assert!(err.to_string().contains("'space_opera' is not valid for 'romance'"));
    }
}
