//! The sorting service and its entry points.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::assemble::assemble;
use crate::cache::{CacheKey, ResultCache};
use crate::classify::{classify, is_blank};
use crate::error::{SortError, SortResult};
use crate::options::{json_kind, SortingOptions};
use crate::strategy::resolve;

/// Sorts property lists, optionally memoizing results.
///
/// The sorter holds no state besides its cache, so one instance can serve
/// any number of threads.
///
/// # Example
///
/// ```rust
/// use propsort::{PropertySorter, SortingOptions, Strategy};
///
/// let sorter = PropertySorter::new();
/// let sorted = sorter
///     .sort(&["width", "--primary-color", "color", "--spacing"], &SortingOptions::default())
///     .unwrap();
/// assert_eq!(sorted, vec!["--primary-color", "--spacing", "", "color", "width"]);
/// ```
#[derive(Clone, Default)]
pub struct PropertySorter {
    cache: Option<Arc<dyn ResultCache>>,
}

impl PropertySorter {
    /// Creates a sorter without a cache.
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Creates a sorter that owns `cache`.
    pub fn with_cache(cache: impl ResultCache + 'static) -> Self {
        Self {
            cache: Some(Arc::new(cache)),
        }
    }

    /// Creates a sorter sharing a cache with other sorters.
    pub fn with_shared_cache(cache: Arc<dyn ResultCache>) -> Self {
        Self { cache: Some(cache) }
    }

    /// Returns the cache, if one is attached.
    pub fn cache(&self) -> Option<&dyn ResultCache> {
        self.cache.as_deref()
    }

    /// Orders `properties` according to `options`.
    ///
    /// Blank input tokens are dropped first; the output's blank tokens are
    /// produced by policy alone. The input is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::MissingConfiguration`] for the custom strategy
    /// without property groups.
    pub fn sort<S: AsRef<str>>(
        &self,
        properties: &[S],
        options: &SortingOptions,
    ) -> SortResult<Vec<String>> {
        options.validate()?;

        let tokens: Vec<String> = properties
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !is_blank(token))
            .map(str::to_string)
            .collect();
        if tokens.len() != properties.len() {
            tracing::trace!(
                dropped = properties.len() - tokens.len(),
                "dropped blank separator tokens from input"
            );
        }

        let Some(cache) = self.cache.as_deref() else {
            return sort_tokens(&tokens, options);
        };

        let key = CacheKey::new(tokens, options);
        if let Some(sorted) = cache.get(&key) {
            tracing::trace!(count = key.properties().len(), "cache hit");
            return Ok(sorted);
        }

        let sorted = sort_tokens(key.properties(), options)?;
        tracing::trace!(count = key.properties().len(), "cache miss");
        cache.insert(key, sorted.clone());
        Ok(sorted)
    }

    /// Untyped entry point for hosts that hold JSON values.
    ///
    /// `properties` must be a list of strings and `options` an option object
    /// as accepted by [`SortingOptions::from_json`].
    pub fn sort_json(&self, properties: &Value, options: &Value) -> SortOutcome {
        let result = properties_from_json(properties)
            .and_then(|properties| {
                let options = SortingOptions::from_json(options)?;
                Ok((properties, options))
            })
            .and_then(|(properties, options)| self.sort(&properties, &options));
        SortOutcome::from(result)
    }
}

impl fmt::Debug for PropertySorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySorter")
            .field("cached", &self.cache.as_ref().map(|cache| cache.len()))
            .finish()
    }
}

fn sort_tokens(tokens: &[String], options: &SortingOptions) -> SortResult<Vec<String>> {
    let classified = classify(tokens);
    tracing::debug!(
        strategy = %options.strategy,
        css_variables = classified.css_variables.len(),
        sass_variables = classified.sass_variables.len(),
        regular = classified.regular.len(),
        "sorting properties"
    );

    let regular = resolve(&classified.regular, options)?;
    Ok(assemble(
        classified.css_variables,
        classified.sass_variables,
        regular,
    ))
}

fn properties_from_json(value: &Value) -> SortResult<Vec<&str>> {
    let items = value.as_array().ok_or_else(|| {
        SortError::invalid(format!("properties must be a list, got {}", json_kind(value)))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().ok_or_else(|| {
                SortError::invalid(format!(
                    "property {} must be a string, got {}",
                    index,
                    json_kind(item)
                ))
            })
        })
        .collect()
}

/// Orders `properties` according to `options`, without caching.
///
/// ```rust
/// use propsort::{sort_properties, SortingOptions};
///
/// let sorted = sort_properties(
///     &["z-index", "color", "margin", "display", "width"],
///     &SortingOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(sorted, vec!["color", "display", "margin", "width", "z-index"]);
/// ```
pub fn sort_properties<S: AsRef<str>>(
    properties: &[S],
    options: &SortingOptions,
) -> SortResult<Vec<String>> {
    PropertySorter::new().sort(properties, options)
}

/// Untyped entry point without caching. See [`PropertySorter::sort_json`].
pub fn sort_json(properties: &Value, options: &Value) -> SortOutcome {
    PropertySorter::new().sort_json(properties, options)
}

/// Result of a sort call in the shape JSON hosts expect.
///
/// Serializes as `{"success": true, "sortedProperties": [...]}` or
/// `{"success": false, "error": "...", "kind": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Success(Vec<String>),
    Failure(SortError),
}

impl SortOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SortOutcome::Success(_))
    }

    pub fn sorted_properties(&self) -> Option<&[String]> {
        match self {
            SortOutcome::Success(sorted) => Some(sorted.as_slice()),
            SortOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SortError> {
        match self {
            SortOutcome::Success(_) => None,
            SortOutcome::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> SortResult<Vec<String>> {
        match self {
            SortOutcome::Success(sorted) => Ok(sorted),
            SortOutcome::Failure(err) => Err(err),
        }
    }
}

impl From<SortResult<Vec<String>>> for SortOutcome {
    fn from(result: SortResult<Vec<String>>) -> Self {
        match result {
            Ok(sorted) => SortOutcome::Success(sorted),
            Err(err) => SortOutcome::Failure(err),
        }
    }
}

impl Serialize for SortOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SortOutcome::Success(sorted) => {
                let mut state = serializer.serialize_struct("SortOutcome", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("sortedProperties", sorted)?;
                state.end()
            }
            SortOutcome::Failure(err) => {
                let mut state = serializer.serialize_struct("SortOutcome", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &err.to_string())?;
                state.serialize_field("kind", err.kind())?;
                state.end()
            }
        }
    }
}
