//! Vendor prefix handling.
//!
//! A vendor prefix is a leading `-name-` segment such as `-webkit-` or
//! `-moz-`. Any such segment counts, not just the well-known four, so
//! `-khtml-user-select` canonicalizes to `user-select` as well.

use once_cell::sync::Lazy;
use regex::Regex;

static VENDOR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-[A-Za-z0-9]+-").expect("vendor prefix pattern is valid"));

/// Returns the vendor prefix of a token, including both dashes.
///
/// ```rust
/// use propsort::vendor_prefix;
///
/// assert_eq!(vendor_prefix("-webkit-transform"), Some("-webkit-"));
/// assert_eq!(vendor_prefix("transform"), None);
/// assert_eq!(vendor_prefix("--brand-color"), None);
/// ```
pub fn vendor_prefix(token: &str) -> Option<&str> {
    let token = token.trim();
    let found = VENDOR_PREFIX.find(token)?;
    // A bare "-webkit-" has no base name left to cluster under.
    if found.end() == token.len() {
        return None;
    }
    Some(found.as_str())
}

/// Strips the vendor prefix from a token, if present.
pub fn unprefixed(token: &str) -> &str {
    let token = token.trim();
    match vendor_prefix(token) {
        Some(prefix) => &token[prefix.len()..],
        None => token,
    }
}

/// Canonical lookup name: trimmed, prefix-stripped and lowercased.
pub fn canonical_name(token: &str) -> String {
    unprefixed(token).to_lowercase()
}
