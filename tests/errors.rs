use lispy::{EvalError, Value};

mod cases;

test_case! {
    name: division_by_zero,
    input: "(/ 1 0)",
    value: Value::error(EvalError::DivisionByZero),
    rendered: "Error: division by zero",
}

test_case! {
    name: division_by_zero_later_in_fold,
    input: "(/ 100 5 0 2)",
    value: Value::error(EvalError::DivisionByZero),
    rendered: "Error: division by zero",
}

test_case! {
    name: inner_error_short_circuits_outer,
    input: "(+ 1 (/ 1 0))",
    value: Value::error(EvalError::DivisionByZero),
    rendered: "Error: division by zero",
}

test_case! {
    name: literal_out_of_range,
    input: "(+ 1 9223372036854775808)",
    value: Value::error(EvalError::InvalidNumber),
    rendered: "Error: invalid number",
}

test_case! {
    name: first_error_in_order_wins,
    input: "(+ (/ 2 0) 9223372036854775808)",
    value: Value::error(EvalError::DivisionByZero),
    rendered: "Error: division by zero",
}

test_case! {
    name: operator_as_operand,
    input: "(* 2 -)",
    value: Value::error(EvalError::NotANumber),
    rendered: "Error: cannot operate on non-number",
}

test_case! {
    name: list_as_operand,
    input: "(+ 1 ())",
    value: Value::error(EvalError::NotANumber),
    rendered: "Error: cannot operate on non-number",
}

test_case! {
    name: number_in_operator_position,
    input: "(1 2 3)",
    value: Value::error(EvalError::NotASymbol),
    rendered: "Error: expression does not start with a symbol/operator",
}

test_case! {
    name: list_in_operator_position,
    input: "((+ 1 2) 3)",
    value: Value::error(EvalError::NotASymbol),
    rendered: "Error: expression does not start with a symbol/operator",
}

#[test]
fn invalid_operator_from_built_tree() {
    let list: lispy::ExprList = [Value::symbol("^"), Value::number(2), Value::number(3)]
        .into_iter()
        .collect();
    let result = lispy::eval(Value::Expr(list));
    assert_eq!(result.to_string(), "Error: invalid operator");
}
