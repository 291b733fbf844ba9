//! Conversion of a parse tree into a [`Value`] tree.
//!
//! The reader is generic over [`SyntaxNode`] so it only depends on the shape
//! of the tree, not on the grammar that produced it. Pest pairs implement the
//! trait out of the box.

mod node;


pub use node::{NodeKind, SyntaxNode};

use tracing::trace;

use crate::{
    evaluator::EvalError,
    values::{ExprList, Value},
};

/// Build the value for `node` and everything below it.
///
/// Marker nodes inside a group are skipped. A marker passed in directly reads
/// as an empty list.
pub fn read<N: SyntaxNode>(node: &N) -> Value {
    match node.kind() {
        NodeKind::Number => read_number(node.text()),
        NodeKind::Symbol => Value::symbol(node.text()),
        NodeKind::Group => {
            let mut list = ExprList::new();
            for child in node.children() {
                if child.kind() == NodeKind::Marker {
                    continue;
                }
                list.push(read(&child));
            }
            Value::Expr(list)
        }
        NodeKind::Marker => Value::empty_list(),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(err) => {
            trace!(text, %err, "rejecting number literal");
            Value::error(EvalError::InvalidNumber)
        }
    }
}
