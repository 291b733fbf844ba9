//! Builtin arithmetic operators.

use core::fmt;

use tracing::trace;

use crate::{
    evaluator::EvalError,
    values::{ExprList, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Combine two integers.
    ///
    /// Uses wrapping arithmetic to prevent panics on overflow.
    /// Division by zero returns an error.
    pub fn combine(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Operator::Add => Ok(left.wrapping_add(right)),
            Operator::Sub => Ok(left.wrapping_sub(right)),
            Operator::Mul => Ok(left.wrapping_mul(right)),
            Operator::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    // Use wrapping_div to handle i64::MIN / -1 case
                    Ok(left.wrapping_div(right))
                }
            }
        }
    }

    /// Fold `operands` left to right, consuming each one as it is combined.
    ///
    /// A lone operand to `-` is negated instead.
    fn fold(self, operands: impl IntoIterator<Item = i64>) -> Result<Option<i64>, EvalError> {
        let mut operands = operands.into_iter().peekable();
        let Some(first) = operands.next() else {
            return Ok(None);
        };
        if self == Operator::Sub && operands.peek().is_none() {
            return Ok(Some(first.wrapping_neg()));
        }
        operands
            .try_fold(first, |acc, operand| self.combine(acc, operand))
            .map(Some)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply the operator named `name` to `operands`.
///
/// Every operand must be a number; the operator is checked next. Failures
/// come back as [`Value::Error`] and the operand list is dropped with them.
/// An empty operand list is handed back unchanged.
pub fn apply(name: &str, operands: ExprList) -> Value {
    trace!(operator = name, operands = operands.len(), "applying builtin");

    if operands.is_empty() {
        return Value::Expr(operands);
    }
    if !operands.iter().all(|operand| operand.as_number().is_some()) {
        return Value::error(EvalError::NotANumber);
    }
    let Some(operator) = Operator::from_symbol(name) else {
        return Value::error(EvalError::InvalidOperator);
    };

    let numbers = operands.into_iter().filter_map(|operand| operand.as_number());
    match operator.fold(numbers) {
        Ok(Some(result)) => Value::number(result),
        Ok(None) => Value::empty_list(),
        Err(err) => {
            trace!(%operator, %err, "builtin failed");
            Value::error(err)
        }
    }
}
