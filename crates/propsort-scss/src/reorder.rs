//! Canonical placement of module rules, `@property` and variables.
//!
//! The sorting core orders flat property names; SCSS blocks also carry
//! at-rules that must stay in front of everything else. This pass fixes
//! their positions first:
//!
//! 1. `@use` and `@forward`
//! 2. `@property`
//! 3. top-of-block custom properties (`--x`)
//! 4. top-of-block SASS variables (`$x`)
//! 5. everything else, in input order
//!
//! "Top of block" means before the first nested rule or block at-rule.
//! Variables after that point stay where they are, since moving them
//! across a nested block would change what the block sees.

use crate::node::Node;

/// A node together with the comments written directly above it.
#[derive(Debug)]
pub(crate) struct Unit {
    pub(crate) comments: Vec<Node>,
    pub(crate) node: Node,
}

impl Unit {
    pub(crate) fn flatten_into(self, out: &mut Vec<Node>) {
        out.extend(self.comments);
        out.push(self.node);
    }
}

/// Splits a block into units. Trailing comments with no node after them
/// are returned separately.
pub(crate) fn units(nodes: &[Node]) -> (Vec<Unit>, Vec<Node>) {
    let mut units = Vec::new();
    let mut pending = Vec::new();

    for node in nodes {
        if node.is_comment() {
            pending.push(node.clone());
        } else {
            units.push(Unit {
                comments: std::mem::take(&mut pending),
                node: node.clone(),
            });
        }
    }

    (units, pending)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Placement {
    Module,
    Property,
    CustomProperty,
    SassVariable,
    Rest,
}

/// Returns a new block with module rules, `@property` rules and
/// top-of-block variables moved to the front. Nested blocks are processed
/// recursively. The input is not modified.
///
/// # Example
///
/// ```rust
/// use propsort_scss::{reorder_block, Node};
///
/// let block = vec![
///     Node::decl("color", "red"),
///     Node::decl("$gap", "4px"),
///     Node::at_rule("use", "'sass:math'"),
/// ];
///
/// assert_eq!(
///     reorder_block(&block),
///     vec![
///         Node::at_rule("use", "'sass:math'"),
///         Node::decl("$gap", "4px"),
///         Node::decl("color", "red"),
///     ]
/// );
/// ```
pub fn reorder_block(nodes: &[Node]) -> Vec<Node> {
    let (units, trailing) = units(nodes);
    let first_block = units
        .iter()
        .position(|unit| unit.node.is_nested_block())
        .unwrap_or(units.len());

    let mut placed: Vec<(Placement, Unit)> = units
        .into_iter()
        .enumerate()
        .map(|(index, mut unit)| {
            let placement = placement_of(&unit.node, index < first_block);
            if placement == Placement::Rest || placement == Placement::Module {
                if let Some(children) = unit.node.children_mut() {
                    *children = reorder_block(children);
                }
            }
            (placement, unit)
        })
        .collect();

    // Stable: units keep input order within a placement.
    placed.sort_by_key(|(placement, _)| *placement);

    let mut out = Vec::with_capacity(nodes.len());
    for (_, unit) in placed {
        unit.flatten_into(&mut out);
    }
    out.extend(trailing);
    out
}

fn placement_of(node: &Node, top_of_block: bool) -> Placement {
    if node.is_module_rule() {
        Placement::Module
    } else if node.is_property_rule() {
        Placement::Property
    } else if top_of_block && node.is_custom_property() {
        Placement::CustomProperty
    } else if top_of_block && node.is_sass_variable() {
        Placement::SassVariable
    } else {
        Placement::Rest
    }
}
