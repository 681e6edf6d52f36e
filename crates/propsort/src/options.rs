//! Sorting configuration.
//!
//! [`SortingOptions`] is built either in code with the builder methods or
//! from the camelCase option object a linter host passes around:
//!
//! ```json
//! {
//!   "strategy": "custom",
//!   "emptyLinesBetweenGroups": true,
//!   "sortPropertiesWithinGroups": false,
//!   "propertyGroups": [["position", "top"], ["display"]]
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{SortError, SortResult};
use crate::tables::PropertyGroups;

/// The ordering algorithm for one sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Base-name order, vendor variants clustered with their base.
    #[default]
    Alphabetical,
    /// Buckets from the built-in group table.
    Grouped,
    /// Outside-in priority from the concentric table.
    Concentric,
    /// Buckets from the idiomatic-CSS group table.
    Idiomatic,
    /// Buckets from caller-supplied groups.
    Custom,
}

impl Strategy {
    /// All strategies, in documentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Alphabetical,
        Strategy::Grouped,
        Strategy::Concentric,
        Strategy::Idiomatic,
        Strategy::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Alphabetical => "alphabetical",
            Strategy::Grouped => "grouped",
            Strategy::Concentric => "concentric",
            Strategy::Idiomatic => "idiomatic",
            Strategy::Custom => "custom",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| SortError::UnknownStrategy {
                strategy: s.to_string(),
            })
    }
}

/// Options for a single sort call.
///
/// # Example
///
/// ```rust
/// use propsort::{PropertyGroups, SortingOptions, Strategy};
///
/// let options = SortingOptions::new(Strategy::Custom)
///     .property_groups(PropertyGroups::new([["position", "top"], ["display", "width"]]).unwrap())
///     .empty_lines_between_groups(true);
///
/// assert!(options.empty_lines_between_groups);
/// assert!(options.sort_properties_within_groups);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingOptions {
    pub strategy: Strategy,
    /// Insert a blank separator between non-empty groups.
    pub empty_lines_between_groups: bool,
    /// Alphabetize inside each group instead of keeping input order.
    pub sort_properties_within_groups: bool,
    /// Groups for [`Strategy::Custom`]; ignored by the other strategies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_groups: Option<PropertyGroups>,
}

impl SortingOptions {
    /// Creates options for `strategy` with every other field at its default.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            empty_lines_between_groups: false,
            sort_properties_within_groups: true,
            property_groups: None,
        }
    }

    pub fn empty_lines_between_groups(mut self, enabled: bool) -> Self {
        self.empty_lines_between_groups = enabled;
        self
    }

    pub fn sort_properties_within_groups(mut self, enabled: bool) -> Self {
        self.sort_properties_within_groups = enabled;
        self
    }

    pub fn property_groups(mut self, groups: PropertyGroups) -> Self {
        self.property_groups = Some(groups);
        self
    }

    /// Reads options from a host's JSON option object.
    ///
    /// Missing booleans take their defaults. `propertyGroups` is read only
    /// for the custom strategy.
    ///
    /// # Errors
    ///
    /// - [`SortError::InvalidInput`] if `value` is not an object or a field
    ///   has the wrong type
    /// - [`SortError::MissingConfiguration`] if `strategy` is absent, or the
    ///   custom strategy lacks a non-empty table of tables
    /// - [`SortError::UnknownStrategy`] for an unrecognized strategy name
    pub fn from_json(value: &Value) -> SortResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            SortError::invalid(format!("options must be an object, got {}", json_kind(value)))
        })?;

        let strategy = match object.get("strategy") {
            None | Some(Value::Null) => {
                return Err(SortError::missing("strategy is required"));
            }
            Some(Value::String(name)) => name.parse::<Strategy>()?,
            Some(other) => {
                return Err(SortError::invalid(format!(
                    "strategy must be a string, got {}",
                    json_kind(other)
                )));
            }
        };

        let mut options = SortingOptions::new(strategy)
            .empty_lines_between_groups(read_bool(object, "emptyLinesBetweenGroups", false)?)
            .sort_properties_within_groups(read_bool(
                object,
                "sortPropertiesWithinGroups",
                true,
            )?);

        if strategy == Strategy::Custom {
            options.property_groups = Some(groups_from_json(object.get("propertyGroups"))?);
        }

        Ok(options)
    }

    /// Checks that the strategy has the configuration it needs.
    pub fn validate(&self) -> SortResult<()> {
        if self.strategy == Strategy::Custom && self.property_groups.is_none() {
            return Err(SortError::missing(
                "propertyGroups is required for the custom strategy",
            ));
        }
        Ok(())
    }

    /// Copy with fields that cannot affect the result cleared, for cache keys.
    pub(crate) fn normalized(&self) -> Self {
        let mut options = self.clone();
        if options.strategy != Strategy::Custom {
            options.property_groups = None;
        }
        options
    }
}

impl Default for SortingOptions {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

fn read_bool(object: &Map<String, Value>, key: &str, default: bool) -> SortResult<bool> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(SortError::invalid(format!(
            "{} must be a boolean, got {}",
            key,
            json_kind(other)
        ))),
    }
}

fn groups_from_json(value: Option<&Value>) -> SortResult<PropertyGroups> {
    let groups = match value {
        None | Some(Value::Null) => {
            return Err(SortError::missing(
                "propertyGroups is required for the custom strategy",
            ));
        }
        Some(Value::Array(groups)) => groups,
        Some(other) => {
            return Err(SortError::missing(format!(
                "propertyGroups must be a list of lists, got {}",
                json_kind(other)
            )));
        }
    };

    let mut table = Vec::with_capacity(groups.len());
    for (index, group) in groups.iter().enumerate() {
        let entries = group.as_array().ok_or_else(|| {
            SortError::missing(format!(
                "property group {} must be a list, got {}",
                index,
                json_kind(group)
            ))
        })?;
        let mut names = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.as_str().ok_or_else(|| {
                SortError::missing(format!(
                    "property group {} must contain only strings, got {}",
                    index,
                    json_kind(entry)
                ))
            })?;
            names.push(name);
        }
        table.push(names);
    }

    PropertyGroups::new(table)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
