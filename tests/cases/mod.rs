#![allow(dead_code)]

use lispy::{Engine, Error, Value};
use once_cell::sync::Lazy;

pub fn run(input: &str) -> Result<Value, Error> {
    Engine::default().run(input)
}

/// Generates a `#[test]` that runs `input` through the engine.
///
/// - `value:` / `rendered:` check the evaluated result and its printed form.
/// - `parse_error:` expects the line to be rejected with the given code.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        value: $value:expr,
        rendered: $rendered:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let result = $crate::cases::run($input).expect("parsing failed");
            pretty_assertions::assert_eq!(result, $value);
            pretty_assertions::assert_eq!(lispy::render(&result), $rendered);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        rendered: $rendered:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let result = $crate::cases::run($input).expect("parsing failed");
            pretty_assertions::assert_eq!(lispy::render(&result), $rendered);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        parse_error: $code:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let err = $crate::cases::run($input).expect_err("parsing should fail");
            pretty_assertions::assert_eq!(err.diagnostic().code.as_deref(), Some($code));
        }
    };
}

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub rendered: &'static str,
}

/// Well-formed arithmetic with the result expected from left-to-right
/// folding (a lone operand to `-` is negated).
pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "single_number",
            expr: "5",
            rendered: "5",
        },
        TestCase {
            name: "sum",
            expr: "(+ 1 2 3)",
            rendered: "6",
        },
        TestCase {
            name: "product",
            expr: "(* 2 3 4)",
            rendered: "24",
        },
        TestCase {
            name: "unary_minus",
            expr: "(- 5)",
            rendered: "-5",
        },
        TestCase {
            name: "binary_minus",
            expr: "(- 5 2)",
            rendered: "3",
        },
        TestCase {
            name: "left_fold_subtraction",
            expr: "(- 100 10 20 30)",
            rendered: "40",
        },
        TestCase {
            name: "left_fold_division",
            expr: "(/ 1000 10 5)",
            rendered: "20",
        },
        TestCase {
            name: "nested",
            expr: "(+ 1 (* 2 3))",
            rendered: "7",
        },
        TestCase {
            name: "deeply_nested",
            expr: "(* (+ 1 2) (- (/ 20 4) (- 2)))",
            rendered: "21",
        },
        TestCase {
            name: "top_level_operator",
            expr: "* 10 (- 3 5)",
            rendered: "-20",
        },
        TestCase {
            name: "negative_literals",
            expr: "(+ -1 -2 (- -3))",
            rendered: "0",
        },
        TestCase {
            name: "empty_list",
            expr: "()",
            rendered: "()",
        },
    ]
});
