//! Error types for generator construction.

use thiserror::Error;

/// Errors raised while building generators.
///
/// Every variant except [`GenError::ExhaustedRetries`] is reported when a
/// combinator is constructed, before any value is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A required callable was missing or a count was negative.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A choice combinator was given no candidates.
    #[error("Cannot choose from an empty set of candidates")]
    EmptyChoiceSet,

    /// A weighted choice carried a weight that is not positive.
    #[error("Invalid weight {weight} at index {index} (weights must be positive)")]
    InvalidWeight { index: usize, weight: i64 },

    /// A bounded filter found no acceptable value.
    #[error("No generated value satisfied the predicate after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },
}

impl GenError {
    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
