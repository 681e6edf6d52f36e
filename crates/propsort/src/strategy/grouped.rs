//! Table-driven group ordering.
//!
//! Shared by the `grouped`, `idiomatic` and `custom` strategies, which differ
//! only in the table they pass in.

use crate::classify::BLANK;
use crate::options::SortingOptions;
use crate::tables::PropertyGroups;
use crate::vendor::canonical_name;

use super::alphabetical;

/// Orders tokens by the group each one belongs to.
///
/// Tokens are bucketed by the first group listing their canonical name;
/// names in no group go to a trailing bucket. Buckets are emitted in table
/// order, the ungrouped bucket last. With `empty_lines_between_groups`, one
/// blank token separates adjacent non-empty buckets.
///
/// ```rust
/// use propsort::{sort_grouped, PropertyGroups, SortingOptions, Strategy};
///
/// let groups = PropertyGroups::new([["first", "second"], ["third", "fourth"]]).unwrap();
/// let options = SortingOptions::new(Strategy::Custom).empty_lines_between_groups(true);
///
/// let sorted = sort_grouped(&["fourth", "first", "third", "second"], &groups, &options);
/// assert_eq!(sorted, vec!["first", "second", "", "fourth", "third"]);
/// ```
pub fn sort_grouped<S: AsRef<str>>(
    tokens: &[S],
    groups: &PropertyGroups,
    options: &SortingOptions,
) -> Vec<String> {
    let index = groups.index();
    let ungrouped = groups.len();
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); ungrouped + 1];

    for token in tokens {
        let token = token.as_ref();
        let slot = index
            .get(canonical_name(token).as_str())
            .copied()
            .unwrap_or(ungrouped);
        buckets[slot].push(token.to_string());
    }

    if options.sort_properties_within_groups {
        for bucket in &mut buckets {
            alphabetical::sort_in_place(bucket);
        }
    }

    let mut sorted = Vec::with_capacity(tokens.len() + buckets.len());
    for bucket in buckets.into_iter().filter(|bucket| !bucket.is_empty()) {
        if options.empty_lines_between_groups && !sorted.is_empty() {
            sorted.push(BLANK.to_string());
        }
        sorted.extend(bucket);
    }
    sorted
}
