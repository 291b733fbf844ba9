//! Tree-walking evaluator for Lispy values.
//!
//! ## Design Principles
//!
//! - **Errors are values**: a failing subexpression yields `Value::Error`,
//!   which wins over its siblings at the enclosing list
//! - **Single owner**: evaluation consumes its input, so every child is
//!   either folded into the result or dropped
//! - **Never panic** on user input: overflow wraps, division by zero is an error
//!
//! ## Example
//!
//! ```ignore
//! use lispy_core::{evaluator, parser};
//!
//! let tree = parser::parse("(+ 1 (* 2 3))").unwrap();
//! let result = evaluator::evaluate(&tree);
//! assert_eq!(result.as_number(), Some(7));
//! ```

pub mod builtins;
mod error;
mod eval;


pub use builtins::{Operator, apply};
pub use error::EvalError;
pub use eval::eval;

use crate::{reader, reader::SyntaxNode, values::Value};

/// Read a parse tree into a value and evaluate it.
pub fn evaluate<N: SyntaxNode>(root: &N) -> Value {
    eval(reader::read(root))
}
