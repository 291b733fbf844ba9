use pest::iterators::Pair;

use crate::parser::Rule;

/// Structural classification of a parse-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Integer literal.
    Number,
    /// Operator symbol.
    Symbol,
    /// The root of the tree or a parenthesized list.
    Group,
    /// Punctuation and parser bookkeeping (e.g. end of input). Carries no value.
    Marker,
}

/// A node of a parse tree, as the reader sees it.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Literal text covered by the node.
    fn text(&self) -> &str;

    /// Direct children, in source order.
    fn children(&self) -> impl Iterator<Item = Self>;
}

impl SyntaxNode for Pair<'_, Rule> {
    fn kind(&self) -> NodeKind {
        match self.as_rule() {
            Rule::number => NodeKind::Number,
            Rule::symbol => NodeKind::Symbol,
            Rule::program | Rule::sexpr => NodeKind::Group,
            _ => NodeKind::Marker,
        }
    }

    fn text(&self) -> &str {
        self.as_str()
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        self.clone().into_inner()
    }
}
