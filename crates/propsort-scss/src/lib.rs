//! SCSS block processing for propsort.
//!
//! The sorting core works on flat property names. This crate handles the
//! parts of an SCSS block the core never sees:
//!
//! - [`reorder_block`]: moves `@use`/`@forward`, `@property` and
//!   top-of-block variables into their canonical positions
//! - [`apply_plan`]: rearranges a block's declarations to follow a
//!   [`propsort::ReorderPlan`], inserting blank-line markers
//! - [`sort_block`]: both passes, recursively, for every nested block.
//!   Only declarations above a block's first nested block are sorted
//!
//! All functions return new node lists; inputs are never modified.
//!
//! The final order agrees with the core: module rules, then `@property`,
//! then custom properties, then SASS variables, then regular declarations.

mod apply;
mod error;
mod node;
mod reorder;

pub use apply::{apply_plan, sort_block};
pub use error::ScssError;
pub use node::{declaration_names, Node};
pub use reorder::reorder_block;
