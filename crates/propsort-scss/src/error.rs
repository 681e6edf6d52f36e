//! Block processing errors.

use propsort::SortError;
use thiserror::Error;

/// Error returned when a block cannot be reordered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScssError {
    /// The plan does not describe this block's declarations.
    #[error("reorder plan covers {found} declarations but the block has {expected}")]
    PlanMismatch { expected: usize, found: usize },

    /// The plan refers to a declaration the block does not have.
    #[error("reorder plan refers to declaration {index} but the block has {count}")]
    PlanOutOfRange { index: usize, count: usize },

    /// The sorting core rejected the request.
    #[error(transparent)]
    Sort(#[from] SortError),
}
