//! Property ordering tables.
//!
//! This module provides:
//!
//! - [`PropertyGroups`]: An ordered table of ordered property groups
//! - [`default_groups`]: The table behind the `grouped` strategy
//! - [`idiomatic_groups`]: The finer-grained table behind `idiomatic`
//! - [`CONCENTRIC_ORDER`]: The flat outside-in list behind `concentric`
//!
//! Built-in tables are process-wide constants, built once on first use.
//! Entries are canonical: lowercase and without vendor prefix.

mod concentric;
mod default;
mod idiomatic;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{SortError, SortResult};

pub use concentric::CONCENTRIC_ORDER;

static DEFAULT_GROUPS: Lazy<PropertyGroups> =
    Lazy::new(|| PropertyGroups::from_static(default::GROUPS));

static IDIOMATIC_GROUPS: Lazy<PropertyGroups> =
    Lazy::new(|| PropertyGroups::from_static(idiomatic::GROUPS));

static CONCENTRIC_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(CONCENTRIC_ORDER.len());
    for (position, name) in CONCENTRIC_ORDER.iter().enumerate() {
        index.entry(*name).or_insert(position);
    }
    index
});

/// The table used by the `grouped` strategy.
pub fn default_groups() -> &'static PropertyGroups {
    &DEFAULT_GROUPS
}

/// The table used by the `idiomatic` strategy.
pub fn idiomatic_groups() -> &'static PropertyGroups {
    &IDIOMATIC_GROUPS
}

/// Position of a canonical name in [`CONCENTRIC_ORDER`].
pub fn concentric_position(canonical: &str) -> Option<usize> {
    CONCENTRIC_INDEX.get(canonical).copied()
}

/// An ordered sequence of property groups.
///
/// Group order is output priority. A name listed in more than one group
/// belongs to the first one.
///
/// # Example
///
/// ```rust
/// use propsort::PropertyGroups;
///
/// let groups = PropertyGroups::new([["first", "second"], ["third", "fourth"]]).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.group_of("third"), Some(1));
/// assert_eq!(groups.group_of("fifth"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PropertyGroups {
    groups: Vec<Vec<String>>,
}

impl PropertyGroups {
    /// Builds a table from caller-supplied groups.
    ///
    /// Entries are trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::MissingConfiguration`] if the table is empty, a
    /// group is empty, or an entry is blank.
    pub fn new<G, P, S>(groups: G) -> SortResult<Self>
    where
        G: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Vec::new();

        for (index, group) in groups.into_iter().enumerate() {
            let mut names = Vec::new();
            for name in group {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    return Err(SortError::missing(format!(
                        "property group {} contains a blank entry",
                        index
                    )));
                }
                names.push(name.to_lowercase());
            }
            if names.is_empty() {
                return Err(SortError::missing(format!("property group {} is empty", index)));
            }
            table.push(names);
        }

        if table.is_empty() {
            return Err(SortError::missing("propertyGroups must not be empty"));
        }

        Ok(Self { groups: table })
    }

    fn from_static(groups: &[&[&str]]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|group| group.iter().map(|name| name.to_string()).collect())
                .collect(),
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates the groups in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.groups.iter().map(Vec::as_slice)
    }

    /// Index of the first group listing `canonical`.
    pub fn group_of(&self, canonical: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|name| name == canonical))
    }

    /// Name-to-group lookup for a whole sort pass.
    pub(crate) fn index(&self) -> HashMap<&str, usize> {
        let mut index = HashMap::new();
        for (position, group) in self.groups.iter().enumerate() {
            for name in group {
                index.entry(name.as_str()).or_insert(position);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_canonical_and_unique(table: &PropertyGroups) {
        let mut seen = HashSet::new();
        for group in table.iter() {
            assert!(!group.is_empty());
            for name in group {
                assert_eq!(name, &name.to_lowercase(), "'{}' is not lowercase", name);
                assert_eq!(crate::unprefixed(name), name, "'{}' is prefixed", name);
                assert!(seen.insert(name.clone()), "'{}' is listed twice", name);
            }
        }
    }

    #[test]
    fn test_default_table_is_well_formed() {
        assert_canonical_and_unique(default_groups());
    }

    #[test]
    fn test_idiomatic_table_is_well_formed() {
        assert_canonical_and_unique(idiomatic_groups());
        assert!(idiomatic_groups().len() > default_groups().len());
    }

    #[test]
    fn test_concentric_table_is_well_formed() {
        let mut seen = HashSet::new();
        for name in CONCENTRIC_ORDER {
            assert_eq!(*name, name.to_lowercase());
            assert!(seen.insert(*name), "'{}' is listed twice", name);
        }
    }

    #[test]
    fn test_concentric_position() {
        assert_eq!(concentric_position("display"), Some(0));
        assert!(concentric_position("position") < concentric_position("margin"));
        assert!(concentric_position("margin") < concentric_position("padding"));
        assert!(concentric_position("padding") < concentric_position("color"));
        assert_eq!(concentric_position("not-a-property"), None);
    }

    #[test]
    fn test_new_canonicalizes() {
        let groups = PropertyGroups::new([vec![" Color ", "BACKGROUND"]]).unwrap();
        assert_eq!(groups.group_of("color"), Some(0));
        assert_eq!(groups.group_of("background"), Some(0));
    }

    #[test]
    fn test_new_rejects_empty_table() {
        let err = PropertyGroups::new(Vec::<Vec<&str>>::new()).unwrap_err();
        assert!(matches!(err, SortError::MissingConfiguration { .. }));
    }

    #[test]
    fn test_new_rejects_empty_group() {
        let err = PropertyGroups::new(vec![vec!["color"], vec![]]).unwrap_err();
        assert!(err.to_string().contains("group 1 is empty"));
    }

    #[test]
    fn test_new_rejects_blank_entry() {
        let err = PropertyGroups::new([["color", "  "]]).unwrap_err();
        assert!(matches!(err, SortError::MissingConfiguration { .. }));
    }

    #[test]
    fn test_first_group_wins() {
        let groups = PropertyGroups::new([["a", "b"], ["b", "c"]]).unwrap();
        assert_eq!(groups.group_of("b"), Some(0));
        assert_eq!(groups.index().get("b"), Some(&0));
    }
}
