//! Strategy resolvers for regular (non-variable) properties.
//!
//! Each resolver maps the regular-property sublist to an ordered sequence.
//! Variable sections are the assembler's job.

mod alphabetical;
mod concentric;
mod grouped;

pub use alphabetical::sort_alphabetical;
pub use concentric::sort_concentric;
pub use grouped::sort_grouped;

use crate::error::{SortError, SortResult};
use crate::options::{SortingOptions, Strategy};
use crate::tables::{default_groups, idiomatic_groups};

/// Routes `regular` to the resolver selected by `options.strategy`.
///
/// # Errors
///
/// Returns [`SortError::MissingConfiguration`] for the custom strategy
/// without property groups.
pub fn resolve(regular: &[String], options: &SortingOptions) -> SortResult<Vec<String>> {
    tracing::trace!(strategy = %options.strategy, count = regular.len(), "resolving");

    let sorted = match options.strategy {
        Strategy::Alphabetical => sort_alphabetical(regular),
        Strategy::Concentric => sort_concentric(regular),
        Strategy::Grouped => sort_grouped(regular, default_groups(), options),
        Strategy::Idiomatic => sort_grouped(regular, idiomatic_groups(), options),
        Strategy::Custom => {
            let groups = options.property_groups.as_ref().ok_or_else(|| {
                SortError::missing("propertyGroups is required for the custom strategy")
            })?;
            sort_grouped(regular, groups, options)
        }
    };
    Ok(sorted)
}
