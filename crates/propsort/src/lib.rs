//! # Propsort - CSS declaration property ordering
//!
//! Propsort reorders the property names of one CSS rule according to a
//! strategy, keeping custom properties (`--x`) and SASS variables (`$x`) in
//! their own leading sections.
//!
//! ## Quick Start
//!
//! ```rust
//! use propsort::{sort_properties, SortingOptions, Strategy};
//!
//! let options = SortingOptions::new(Strategy::Alphabetical);
//! let sorted = sort_properties(&["width", "--primary-color", "color", "--spacing"], &options).unwrap();
//!
//! assert_eq!(sorted, vec!["--primary-color", "--spacing", "", "color", "width"]);
//! ```
//!
//! The empty string is the blank-separator token: it asks the consumer to
//! render a blank line at that position. See [`BLANK`].
//!
//! ## Strategies
//!
//! | Strategy | Ordering source |
//! |----------|-----------------|
//! | `alphabetical` | base name, vendor variants clustered, prefixed first |
//! | `grouped` | [`default_groups`] |
//! | `concentric` | [`CONCENTRIC_ORDER`] |
//! | `idiomatic` | [`idiomatic_groups`] |
//! | `custom` | caller-supplied [`PropertyGroups`] |
//!
//! ## Pipeline
//!
//! 1. **Classify**: split tokens into custom properties, SASS variables and
//!    regular properties ([`classify`])
//! 2. **Resolve**: order the regular properties with the selected strategy
//! 3. **Assemble**: put the sorted variable sections in front, separated by
//!    blank tokens ([`assemble`])
//!
//! Every step is pure. The only shared mutable state is an optional
//! [`ResultCache`] attached to a [`PropertySorter`].
//!
//! ## Hosts
//!
//! Hosts that work with JSON use [`sort_json`], which returns a serializable
//! [`SortOutcome`]. Hosts that rearrange their own declaration nodes turn the
//! output into a [`ReorderPlan`].

mod assemble;
mod cache;
mod classify;
mod error;
mod options;
mod plan;
mod sorter;
mod strategy;
mod tables;
mod vendor;

pub use assemble::assemble;
pub use cache::{CacheKey, LruCache, ResultCache};
pub use classify::{classify, is_blank, is_css_variable, is_sass_variable, Classified, BLANK};
pub use error::{SortError, SortResult};
pub use options::{SortingOptions, Strategy};
pub use plan::{ReorderPlan, Slot};
pub use sorter::{sort_json, sort_properties, PropertySorter, SortOutcome};
pub use strategy::{resolve, sort_alphabetical, sort_concentric, sort_grouped};
pub use tables::{
    concentric_position, default_groups, idiomatic_groups, PropertyGroups, CONCENTRIC_ORDER,
};
pub use vendor::{canonical_name, unprefixed, vendor_prefix};
