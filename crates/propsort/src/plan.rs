//! Mapping a sorted token list back onto input positions.
//!
//! A host holds its own declaration nodes, one per input token. The plan
//! tells it which input node goes in each output slot, and where blank
//! lines belong, without the core knowing anything about the host's tree.

use std::collections::{HashMap, VecDeque};

use crate::classify::is_blank;
use crate::error::{SortError, SortResult};

/// One position in the reordered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The input token at this index.
    Declaration(usize),
    /// A blank separator line.
    Blank,
}

/// Output order expressed as input indices.
///
/// # Example
///
/// ```rust
/// use propsort::{sort_properties, ReorderPlan, Slot, SortingOptions};
///
/// let input = ["width", "--gap", "color"];
/// let sorted = sort_properties(&input, &SortingOptions::default()).unwrap();
/// let plan = ReorderPlan::new(&input, &sorted).unwrap();
///
/// assert_eq!(
///     plan.slots(),
///     &[Slot::Declaration(1), Slot::Blank, Slot::Declaration(2), Slot::Declaration(0)]
/// );
/// assert!(plan.is_reordered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    slots: Vec<Slot>,
}

impl ReorderPlan {
    /// Matches each sorted token to an input position.
    ///
    /// Repeated names are matched in input order. Blank input tokens are
    /// not declarations and never appear in the plan.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidInput`] if `sorted` is not a permutation of
    /// the non-blank input tokens.
    pub fn new<S, T>(input: &[S], sorted: &[T]) -> SortResult<Self>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut positions: HashMap<&str, VecDeque<usize>> = HashMap::new();
        for (index, token) in input.iter().enumerate() {
            let token = token.as_ref();
            if !is_blank(token) {
                positions.entry(token).or_default().push_back(index);
            }
        }

        let mut slots = Vec::with_capacity(sorted.len());
        for token in sorted {
            let token = token.as_ref();
            if is_blank(token) {
                slots.push(Slot::Blank);
                continue;
            }
            let index = positions
                .get_mut(token)
                .and_then(VecDeque::pop_front)
                .ok_or_else(|| {
                    SortError::invalid(format!(
                        "sorted token '{}' does not match any remaining input token",
                        token
                    ))
                })?;
            slots.push(Slot::Declaration(index));
        }

        if let Some((token, _)) = positions.iter().find(|(_, left)| !left.is_empty()) {
            return Err(SortError::invalid(format!(
                "input token '{}' is missing from the sorted output",
                token
            )));
        }

        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Input indices in output order, blanks skipped.
    pub fn declaration_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Declaration(index) => Some(*index),
            Slot::Blank => None,
        })
    }

    /// Number of blank slots.
    pub fn blank_count(&self) -> usize {
        self.slots.iter().filter(|slot| **slot == Slot::Blank).count()
    }

    /// Returns `true` if any declaration moved. Blank slots alone never count.
    pub fn is_reordered(&self) -> bool {
        let order: Vec<usize> = self.declaration_order().collect();
        order.windows(2).any(|pair| pair[0] > pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_plan() {
        let plan = ReorderPlan::new(&["color", "width"], &["color", "width"]).unwrap();
        assert!(!plan.is_reordered());
        assert_eq!(plan.declaration_order().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_blank_slots_are_not_a_reorder() {
        let plan = ReorderPlan::new(&["top", "color"], &["top", "", "color"]).unwrap();
        assert!(!plan.is_reordered());
        assert_eq!(plan.blank_count(), 1);
    }

    #[test]
    fn test_duplicates_matched_in_order() {
        let plan = ReorderPlan::new(&["color", "width", "color"], &["color", "color", "width"])
            .unwrap();
        assert_eq!(
            plan.slots(),
            &[
                Slot::Declaration(0),
                Slot::Declaration(2),
                Slot::Declaration(1)
            ]
        );
        assert!(plan.is_reordered());
    }

    #[test]
    fn test_blank_input_tokens_are_skipped() {
        let plan = ReorderPlan::new(&["width", "", "color"], &["color", "width"]).unwrap();
        assert_eq!(plan.slots(), &[Slot::Declaration(2), Slot::Declaration(0)]);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = ReorderPlan::new(&["color"], &["color", "width"]).unwrap_err();
        assert!(err.to_string().contains("'width'"));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = ReorderPlan::new(&["color", "width"], &["color"]).unwrap_err();
        assert!(err.to_string().contains("'width'"));
        assert_eq!(err.kind(), "InvalidInput");
    }
}
