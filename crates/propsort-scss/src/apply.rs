//! Rebuilding a block from a core reorder plan.

use propsort::{ReorderPlan, Slot, SortingOptions};

use crate::error::ScssError;
use crate::node::{declaration_names, Node};
use crate::reorder::{reorder_block, units, Unit};

/// Returns a new block whose declarations follow `plan`.
///
/// Declaration indices in the plan refer to [`declaration_names`] of the
/// same block. Blank slots become [`Node::blank`]; existing blank comments
/// are dropped so a second pass does not stack them. Other comments move
/// with the node below them. Non-declaration nodes above the first
/// declaration stay in front, the rest follow the declarations in input
/// order.
///
/// # Errors
///
/// Returns [`ScssError::PlanOutOfRange`] or [`ScssError::PlanMismatch`] if
/// the plan was built for a different block.
pub fn apply_plan(nodes: &[Node], plan: &ReorderPlan) -> Result<Vec<Node>, ScssError> {
    let kept: Vec<Node> = nodes.iter().filter(|node| !node.is_blank()).cloned().collect();
    let (units, trailing_comments) = units(&kept);

    let mut leading = Vec::new();
    let mut declarations: Vec<Option<Unit>> = Vec::new();
    let mut rest = Vec::new();

    for unit in units {
        if unit.node.is_declaration() {
            declarations.push(Some(unit));
        } else if declarations.is_empty() {
            unit.flatten_into(&mut leading);
        } else {
            unit.flatten_into(&mut rest);
        }
    }

    let count = declarations.len();
    let found = plan.declaration_order().count();
    if found != count {
        return Err(ScssError::PlanMismatch {
            expected: count,
            found,
        });
    }

    let mut out = leading;
    for slot in plan.slots() {
        match *slot {
            Slot::Blank => out.push(Node::blank()),
            Slot::Declaration(index) => {
                let unit = declarations
                    .get_mut(index)
                    .and_then(Option::take)
                    .ok_or(ScssError::PlanOutOfRange { index, count })?;
                unit.flatten_into(&mut out);
            }
        }
    }
    out.extend(rest);
    out.extend(trailing_comments);
    Ok(out)
}

/// Runs the at-rule pass and then sorts the declarations of every block.
///
/// Only the top of each block is sorted: everything before its first nested
/// rule or block at-rule. That nested block, the comments above it and
/// every node after it keep their positions, so declarations never cross a
/// nested block.
///
/// # Example
///
/// ```rust
/// use propsort::SortingOptions;
/// use propsort_scss::{sort_block, Node};
///
/// let block = vec![
///     Node::decl("width", "10px"),
///     Node::decl("--accent", "teal"),
///     Node::decl("color", "var(--accent)"),
/// ];
///
/// assert_eq!(
///     sort_block(&block, &SortingOptions::default()).unwrap(),
///     vec![
///         Node::decl("--accent", "teal"),
///         Node::blank(),
///         Node::decl("color", "var(--accent)"),
///         Node::decl("width", "10px"),
///     ]
/// );
/// ```
pub fn sort_block(nodes: &[Node], options: &SortingOptions) -> Result<Vec<Node>, ScssError> {
    sort_declarations(reorder_block(nodes), options)
}

/// Length of the top of a block: the nodes before the first nested block
/// and the comments directly above it.
fn head_len(nodes: &[Node]) -> usize {
    let mut unit_start = 0;
    for (index, node) in nodes.iter().enumerate() {
        if node.is_comment() {
            continue;
        }
        if node.is_nested_block() {
            return unit_start;
        }
        unit_start = index + 1;
    }
    nodes.len()
}

fn sort_declarations(
    mut nodes: Vec<Node>,
    options: &SortingOptions,
) -> Result<Vec<Node>, ScssError> {
    let tail = nodes.split_off(head_len(&nodes));
    let names = declaration_names(&nodes);
    let sorted = propsort::sort_properties(&names, options)?;
    let plan = ReorderPlan::new(&names, &sorted)?;
    tracing::debug!(
        declarations = names.len(),
        untouched = tail.len(),
        reordered = plan.is_reordered(),
        "sorted block"
    );

    let mut block = apply_plan(&nodes, &plan)?;
    block.extend(tail);
    for node in &mut block {
        if node.is_property_rule() {
            continue;
        }
        if let Some(children) = node.children_mut() {
            *children = sort_declarations(std::mem::take(children), options)?;
        }
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use propsort::Strategy;

    #[test]
    fn test_apply_identity_plan() {
        let block = vec![Node::decl("color", "red"), Node::decl("width", "1px")];
        let plan = ReorderPlan::new(&["color", "width"], &["color", "width"]).unwrap();
        assert_eq!(apply_plan(&block, &plan).unwrap(), block);
    }

    #[test]
    fn test_apply_moves_comments_with_declarations() {
        let block = vec![
            Node::at_rule("include", "reset"),
            Node::decl("width", "1px"),
            Node::comment("brand"),
            Node::decl("color", "red"),
            Node::rule("&:hover", vec![]),
        ];
        let plan = ReorderPlan::new(&["width", "color"], &["color", "", "width"]).unwrap();

        assert_eq!(
            apply_plan(&block, &plan).unwrap(),
            vec![
                Node::at_rule("include", "reset"),
                Node::comment("brand"),
                Node::decl("color", "red"),
                Node::blank(),
                Node::decl("width", "1px"),
                Node::rule("&:hover", vec![]),
            ]
        );
    }

    #[test]
    fn test_apply_drops_old_blank_lines() {
        let block = vec![
            Node::decl("--a", "1"),
            Node::blank(),
            Node::decl("color", "red"),
        ];
        let plan = ReorderPlan::new(&["--a", "color"], &["--a", "", "color"]).unwrap();
        assert_eq!(apply_plan(&block, &plan).unwrap(), block);
    }

    #[test]
    fn test_apply_rejects_foreign_plan() {
        let block = vec![Node::decl("color", "red")];
        let plan = ReorderPlan::new(&["color", "width"], &["color", "width"]).unwrap();
        assert_eq!(
            apply_plan(&block, &plan).unwrap_err(),
            ScssError::PlanMismatch {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_apply_rejects_out_of_range_index() {
        let block = vec![Node::comment("x"), Node::decl("color", "red")];
        // Built against a list where "color" sits at index 1.
        let plan = ReorderPlan::new(&["", "color"], &["color"]).unwrap();
        assert_eq!(
            apply_plan(&block, &plan).unwrap_err(),
            ScssError::PlanOutOfRange { index: 1, count: 1 }
        );
    }

    #[test]
    fn test_sort_block_recurses() {
        let block = vec![
            Node::decl("width", "1px"),
            Node::rule(
                "&:hover",
                vec![Node::decl("opacity", "1"), Node::decl("color", "red")],
            ),
            Node::decl("color", "blue"),
        ];

        assert_eq!(
            sort_block(&block, &SortingOptions::new(Strategy::Alphabetical)).unwrap(),
            vec![
                Node::decl("width", "1px"),
                Node::rule(
                    "&:hover",
                    vec![Node::decl("color", "red"), Node::decl("opacity", "1")],
                ),
                Node::decl("color", "blue"),
            ]
        );
    }

    #[test]
    fn test_sort_block_only_sorts_top_of_block() {
        let block = vec![
            Node::decl("width", "1px"),
            Node::decl("color", "red"),
            Node::comment("hover state"),
            Node::rule("&:hover", vec![Node::decl("color", "$late")]),
            Node::decl("z-index", "1"),
            Node::decl("$late", "blue"),
            Node::decl("margin", "0"),
        ];

        assert_eq!(
            sort_block(&block, &SortingOptions::new(Strategy::Alphabetical)).unwrap(),
            vec![
                Node::decl("color", "red"),
                Node::decl("width", "1px"),
                Node::comment("hover state"),
                Node::rule("&:hover", vec![Node::decl("color", "$late")]),
                Node::decl("z-index", "1"),
                Node::decl("$late", "blue"),
                Node::decl("margin", "0"),
            ]
        );
    }

    #[test]
    fn test_head_len() {
        assert_eq!(head_len(&[]), 0);
        assert_eq!(
            head_len(&[Node::decl("color", "red"), Node::comment("x")]),
            2
        );
        assert_eq!(
            head_len(&[
                Node::at_block("property", "--a", vec![]),
                Node::decl("color", "red"),
                Node::comment("nested"),
                Node::rule("a", vec![]),
                Node::decl("width", "1px"),
            ]),
            2
        );
        assert_eq!(head_len(&[Node::at_block("media", "print", vec![])]), 0);
    }

    #[test]
    fn test_sort_block_propagates_core_errors() {
        let block = vec![Node::decl("color", "red")];
        let err = sort_block(&block, &SortingOptions::new(Strategy::Custom)).unwrap_err();
        assert!(matches!(err, ScssError::Sort(_)));
    }
}
