//! Recombination of variable sections with the resolved properties.

use crate::classify::{is_blank, BLANK};

/// Builds the final token list from the classified variables and the
/// strategy's ordering of the regular properties.
///
/// Layout:
///
/// 1. custom properties (`--x`), sorted
/// 2. a blank token, only if both variable kinds are present
/// 3. SASS variables (`$x`), sorted
/// 4. a blank token, if there are variables and regular properties
/// 5. the regular properties
///
/// The separator in step 4 is always emitted; it does not depend on
/// `empty_lines_between_groups`. Variables are sorted in byte order, not by
/// locale: `--B` comes before `--a`.
///
/// ```rust
/// use propsort::assemble;
///
/// let tokens = assemble(
///     vec!["--spacing".into(), "--primary-color".into()],
///     vec![],
///     vec!["color".into(), "width".into()],
/// );
/// assert_eq!(tokens, vec!["--primary-color", "--spacing", "", "color", "width"]);
/// ```
pub fn assemble(
    mut css_variables: Vec<String>,
    mut sass_variables: Vec<String>,
    regular: Vec<String>,
) -> Vec<String> {
    if css_variables.is_empty() && sass_variables.is_empty() {
        return regular;
    }

    css_variables.sort();
    sass_variables.sort();

    let mut tokens =
        Vec::with_capacity(css_variables.len() + sass_variables.len() + regular.len() + 2);
    let both = !css_variables.is_empty() && !sass_variables.is_empty();

    tokens.extend(css_variables);
    if both {
        tokens.push(BLANK.to_string());
    }
    tokens.extend(sass_variables);

    let mut regular = regular.into_iter().peekable();
    // A strategy may lead with a separator; the boundary blank replaces it.
    if regular.peek().is_some_and(|token| is_blank(token)) {
        regular.next();
    }
    if regular.peek().is_some() {
        tokens.push(BLANK.to_string());
        tokens.extend(regular);
    }

    tokens
}
