//! Partitioning of property tokens into variables and regular properties.

/// The reserved blank-separator token.
///
/// It marks a blank line in the output. A real property is never the empty
/// string, so input tokens that are blank after trimming are treated as
/// separators rather than properties.
pub const BLANK: &str = "";

/// Returns `true` for a blank-separator token.
pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

/// Returns `true` for a CSS custom property such as `--brand-color`.
pub fn is_css_variable(token: &str) -> bool {
    token.trim().starts_with("--")
}

/// Returns `true` for a SASS/SCSS variable such as `$spacing`.
pub fn is_sass_variable(token: &str) -> bool {
    token.trim().starts_with('$')
}

/// Tokens split by kind, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub css_variables: Vec<String>,
    pub sass_variables: Vec<String>,
    pub regular: Vec<String>,
}

impl Classified {
    /// Total number of tokens across all partitions.
    pub fn len(&self) -> usize {
        self.css_variables.len() + self.sass_variables.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions tokens into custom properties, SASS variables and the rest.
///
/// Every token lands in exactly one partition.
///
/// ```rust
/// use propsort::classify;
///
/// let parts = classify(&["width", "--gap", "$pad", "color"]);
/// assert_eq!(parts.css_variables, vec!["--gap"]);
/// assert_eq!(parts.sass_variables, vec!["$pad"]);
/// assert_eq!(parts.regular, vec!["width", "color"]);
/// ```
pub fn classify<S: AsRef<str>>(properties: &[S]) -> Classified {
    let mut classified = Classified::default();

    for token in properties {
        let token = token.as_ref();
        let bucket = if is_css_variable(token) {
            &mut classified.css_variables
        } else if is_sass_variable(token) {
            &mut classified.sass_variables
        } else {
            &mut classified.regular
        };
        bucket.push(token.to_string());
    }

    classified
}
