//! Outside-in ordering from the concentric table.

use crate::tables::{concentric_position, CONCENTRIC_ORDER};
use crate::vendor::canonical_name;

/// Orders tokens by their position in [`CONCENTRIC_ORDER`].
///
/// Tokens missing from the table sort after every listed one. Ties,
/// including all unlisted tokens, fall back to the canonical name; tokens
/// with the same canonical name keep their input order.
///
/// ```rust
/// use propsort::sort_concentric;
///
/// let sorted = sort_concentric(&["color", "zoom", "padding", "position", "margin"]);
/// assert_eq!(sorted, vec!["position", "margin", "padding", "color", "zoom"]);
/// ```
pub fn sort_concentric<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let unlisted = CONCENTRIC_ORDER.len();
    let mut sorted: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

    sorted.sort_by_cached_key(|token| {
        let canonical = canonical_name(token);
        let position = concentric_position(&canonical).unwrap_or(unlisted);
        (position, canonical)
    });
    sorted
}
