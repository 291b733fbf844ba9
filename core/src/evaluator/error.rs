//! Evaluation errors.
//!
//! These never leave the evaluator as `Err`: they travel through the value
//! tree as [`Value::Error`](crate::values::Value::Error) and are printed like
//! any other result. The `Display` text is the message shown after `Error: `.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Number literal outside the `i64` range.
    #[error("invalid number")]
    InvalidNumber,

    /// Arithmetic operand that is not a number.
    #[error("cannot operate on non-number")]
    NotANumber,

    #[error("division by zero")]
    DivisionByZero,

    /// Operator symbol with no builtin behind it.
    #[error("invalid operator")]
    InvalidOperator,

    /// List of two or more elements whose head is not a symbol.
    #[error("expression does not start with a symbol/operator")]
    NotASymbol,
}
