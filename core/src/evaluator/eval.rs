use tracing::trace;

use crate::{
    evaluator::{EvalError, builtins},
    values::{ExprList, Value},
};

/// Reduce `value` to its result.
///
/// Numbers, symbols and errors evaluate to themselves; expression lists are
/// reduced by [`eval_expr_list`].
pub fn eval(value: Value) -> Value {
    match value {
        Value::Expr(list) => eval_expr_list(list),
        other => other,
    }
}

fn eval_expr_list(list: ExprList) -> Value {
    // Children first, left to right.
    let mut list: ExprList = list.into_iter().map(eval).collect();

    if let Some(index) = list.iter().position(Value::is_error) {
        trace!(index, "short-circuiting on error");
        return list.take_at(index);
    }

    match list.len() {
        0 => Value::Expr(list),
        1 => list.take_at(0),
        _ => match list.pop_at(0) {
            Value::Symbol(name) => builtins::apply(&name, list),
            head => {
                trace!(head = ?head.kind(), "list head is not a symbol");
                Value::error(EvalError::NotASymbol)
            }
        },
    }
}
