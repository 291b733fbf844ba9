use lispy::Value;

mod cases;

test_case! {
    name: number_literal,
    input: "5",
    value: Value::number(5),
    rendered: "5",
}

test_case! {
    name: negative_literal,
    input: "-42",
    value: Value::number(-42),
    rendered: "-42",
}

test_case! {
    name: max_literal,
    input: "9223372036854775807",
    value: Value::number(i64::MAX),
    rendered: "9223372036854775807",
}

test_case! {
    name: min_literal,
    input: "-9223372036854775808",
    value: Value::number(i64::MIN),
    rendered: "-9223372036854775808",
}

test_case! {
    name: addition,
    input: "(+ 1 2 3)",
    value: Value::number(6),
    rendered: "6",
}

test_case! {
    name: multiplication,
    input: "(* 2 3 4)",
    value: Value::number(24),
    rendered: "24",
}

test_case! {
    name: unary_negation,
    input: "(- 5)",
    value: Value::number(-5),
    rendered: "-5",
}

test_case! {
    name: subtraction,
    input: "(- 5 2)",
    value: Value::number(3),
    rendered: "3",
}

test_case! {
    name: integer_division_truncates,
    input: "(/ 7 2)",
    value: Value::number(3),
    rendered: "3",
}

test_case! {
    name: negative_division_truncates_toward_zero,
    input: "(/ -7 2)",
    value: Value::number(-3),
    rendered: "-3",
}

test_case! {
    name: nested_before_combination,
    input: "(+ 1 (* 2 3))",
    value: Value::number(7),
    rendered: "7",
}

test_case! {
    name: top_level_without_parens,
    input: "+ 1 2",
    value: Value::number(3),
    rendered: "3",
}

test_case! {
    name: whitespace_is_insignificant,
    input: "   (  *   3\t4 )  ",
    value: Value::number(12),
    rendered: "12",
}

test_case! {
    name: addition_wraps_on_overflow,
    input: "(+ 9223372036854775807 1)",
    value: Value::number(i64::MIN),
    rendered: "-9223372036854775808",
}

test_case! {
    name: minus_number_without_space_is_a_literal,
    input: "(+ 1 -1)",
    value: Value::number(0),
    rendered: "0",
}
