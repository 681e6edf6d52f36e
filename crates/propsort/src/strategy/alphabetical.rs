//! Alphabetical ordering with vendor-prefix clustering.
//!
//! Plain lexicographic order would scatter `-webkit-transform` far away from
//! `transform`. Instead every token is keyed by its base name (prefix
//! stripped, lowercased), so all variants of a property form one run; inside
//! a run the prefixed forms come first, then the unprefixed one. Runs are
//! ordered by base name, so `color` sorts before `-moz-transform`.

use crate::vendor::{unprefixed, vendor_prefix};

/// Sort key: base name, then prefixed-before-unprefixed, then the whole token.
pub(crate) fn sort_key(token: &str) -> (String, bool, String) {
    let trimmed = token.trim();
    (
        unprefixed(trimmed).to_lowercase(),
        vendor_prefix(trimmed).is_none(),
        trimmed.to_lowercase(),
    )
}

/// Sorts in place. Equal keys keep their input order.
pub(crate) fn sort_in_place(tokens: &mut [String]) {
    tokens.sort_by_cached_key(|token| sort_key(token));
}

/// Returns the tokens in alphabetical order.
///
/// Comparison is case-insensitive; tokens keep their original casing.
///
/// ```rust
/// use propsort::sort_alphabetical;
///
/// let sorted = sort_alphabetical(&["transform", "-webkit-transform", "color", "-moz-transform"]);
/// assert_eq!(sorted, vec!["color", "-moz-transform", "-webkit-transform", "transform"]);
/// ```
pub fn sort_alphabetical<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
    sort_in_place(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        let sorted = sort_alphabetical(&["z-index", "color", "margin", "display", "width"]);
        assert_eq!(sorted, vec!["color", "display", "margin", "width", "z-index"]);
    }

    #[test]
    fn test_prefixed_variants_precede_base() {
        let sorted = sort_alphabetical(&["transform", "-webkit-transform", "color", "-moz-transform"]);
        assert_eq!(
            sorted,
            vec!["color", "-moz-transform", "-webkit-transform", "transform"]
        );
    }

    #[test]
    fn test_cluster_sorted_by_base_name() {
        let sorted = sort_alphabetical(&[
            "user-select",
            "-ms-user-select",
            "appearance",
            "-webkit-appearance",
            "border",
        ]);
        assert_eq!(
            sorted,
            vec![
                "-webkit-appearance",
                "appearance",
                "border",
                "-ms-user-select",
                "user-select"
            ]
        );
    }

    #[test]
    fn test_case_insensitive_keeps_casing() {
        let sorted = sort_alphabetical(&["Width", "color", "BACKGROUND"]);
        assert_eq!(sorted, vec!["BACKGROUND", "color", "Width"]);
    }

    #[test]
    fn test_identical_keys_are_stable() {
        let sorted = sort_alphabetical(&["COLOR", "color", "Color"]);
        assert_eq!(sorted, vec!["COLOR", "color", "Color"]);
    }

    #[test]
    fn test_base_name_cluster_before_longer_name() {
        let sorted = sort_alphabetical(&["transform-origin", "-webkit-transform", "transform"]);
        assert_eq!(
            sorted,
            vec!["-webkit-transform", "transform", "transform-origin"]
        );
    }
}
