use crate::{
    api::{Engine, EngineOptions, Error, Severity},
    evaluator::EvalError,
    parser::Span,
    values::Value,
};
use pretty_assertions::assert_eq;

#[test]
fn test_run_returns_values() {
    let engine = Engine::default();
    assert_eq!(engine.run("(+ 1 2 3)").unwrap(), Value::number(6));
    assert_eq!(
        engine.run("(/ 1 0)").unwrap(),
        Value::error(EvalError::DivisionByZero)
    );
}

#[test]
fn test_read_does_not_evaluate() {
    let engine = Engine::default();
    let value = engine.read("(+ 1 2)").unwrap();
    assert_eq!(value.to_string(), "((+ 1 2))");
}

#[test]
fn test_parse_failure_becomes_diagnostic() {
    let engine = Engine::default();
    let err = engine.run("(+ 1").unwrap_err();

    let Error::Parse {
        diagnostic,
        source_text,
    } = &err;
    assert_eq!(source_text, "(+ 1");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.code.as_deref(), Some("P002"));
    assert_eq!(diagnostic.span, Span::new(0, 1));
    assert_eq!(err.to_string(), "error: Unclosed delimiter '(' [P002]");
}

#[test]
fn test_max_depth_option_is_honored() {
    let engine = Engine::new(EngineOptions { max_depth: 2 });
    assert!(engine.run("((1))").is_ok());

    let err = engine.run("(((1)))").unwrap_err();
    assert_eq!(err.diagnostic().code.as_deref(), Some("P004"));
    assert_eq!(err.source_text(), "(((1)))");
}

#[test]
fn test_lines_are_independent() {
    let engine = Engine::default();
    let first = engine.run("(* 2 3)").unwrap();
    let second = engine.run("(* 2 3)").unwrap();
    assert_eq!(first, second);
}
