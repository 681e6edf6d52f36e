//! Owned SCSS block nodes.

use propsort::{is_css_variable, is_sass_variable};

/// A node inside a rule block.
///
/// This is a minimal owned model of what a CSS/SCSS AST exposes for one
/// block: enough to reorder children without holding on to a parser's tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `prop: value;`
    Declaration { prop: String, value: String },
    /// `@name params;` or `@name params { children }`.
    AtRule {
        name: String,
        params: String,
        children: Option<Vec<Node>>,
    },
    /// `selector { children }`.
    Rule { selector: String, children: Vec<Node> },
    /// A comment. An empty comment stands for a blank line.
    Comment(String),
}

impl Node {
    pub fn decl(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Declaration {
            prop: prop.into(),
            value: value.into(),
        }
    }

    /// A statement at-rule, e.g. `@use "sass:math";`.
    pub fn at_rule(name: impl Into<String>, params: impl Into<String>) -> Self {
        Node::AtRule {
            name: name.into(),
            params: params.into(),
            children: None,
        }
    }

    /// A block at-rule, e.g. `@media print { ... }`.
    pub fn at_block(name: impl Into<String>, params: impl Into<String>, children: Vec<Node>) -> Self {
        Node::AtRule {
            name: name.into(),
            params: params.into(),
            children: Some(children),
        }
    }

    pub fn rule(selector: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Rule {
            selector: selector.into(),
            children,
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }

    /// A blank-line marker.
    pub fn blank() -> Self {
        Node::Comment(String::new())
    }

    /// Property name of a declaration.
    pub fn prop(&self) -> Option<&str> {
        match self {
            Node::Declaration { prop, .. } => Some(prop),
            _ => None,
        }
    }

    /// Lowercased name of an at-rule, without the `@`.
    pub fn at_rule_name(&self) -> Option<String> {
        match self {
            Node::AtRule { name, .. } => Some(name.trim_start_matches('@').to_lowercase()),
            _ => None,
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, Node::Declaration { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Comment(text) if text.trim().is_empty())
    }

    /// `@use` or `@forward`.
    pub fn is_module_rule(&self) -> bool {
        matches!(self.at_rule_name().as_deref(), Some("use") | Some("forward"))
    }

    /// `@property`.
    pub fn is_property_rule(&self) -> bool {
        self.at_rule_name().as_deref() == Some("property")
    }

    pub fn is_custom_property(&self) -> bool {
        self.prop().is_some_and(is_css_variable)
    }

    pub fn is_sass_variable(&self) -> bool {
        self.prop().is_some_and(is_sass_variable)
    }

    /// A nested rule or a block at-rule.
    pub fn has_block(&self) -> bool {
        matches!(
            self,
            Node::Rule { .. } | Node::AtRule {
                children: Some(_),
                ..
            }
        )
    }

    /// A block that ends the top of its parent. `@property` and module
    /// rules are hoisted, so they never count.
    pub(crate) fn is_nested_block(&self) -> bool {
        self.has_block() && !self.is_module_rule() && !self.is_property_rule()
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Rule { children, .. } => Some(children),
            Node::AtRule {
                children: Some(children),
                ..
            } => Some(children),
            _ => None,
        }
    }
}

/// Direct declaration property names of a block, in order.
///
/// This is the list handed to the sorting core.
pub fn declaration_names(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(Node::prop)
        .map(str::to_string)
        .collect()
}
