//! Sorting errors.

use thiserror::Error;

/// Error returned when a sort request cannot be satisfied.
///
/// Every variant describes bad caller input. The core never produces
/// partial output: a call either yields a complete ordering or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The selected strategy needs configuration that was not supplied.
    #[error("missing configuration: {reason}")]
    MissingConfiguration { reason: String },

    /// The strategy name is not one of the known strategies.
    #[error(
        "unknown sorting strategy '{strategy}'. Available: alphabetical, grouped, concentric, idiomatic, custom"
    )]
    UnknownStrategy { strategy: String },

    /// The properties or options have the wrong shape.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SortError {
    pub(crate) fn missing(reason: impl Into<String>) -> Self {
        SortError::MissingConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the variant name, for hosts that report a machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SortError::MissingConfiguration { .. } => "MissingConfiguration",
            SortError::UnknownStrategy { .. } => "UnknownStrategy",
            SortError::InvalidInput { .. } => "InvalidInput",
        }
    }
}

/// Result type for sorting operations.
pub type SortResult<T> = Result<T, SortError>;
