//! Textual rendering of values.

use core::fmt;

use crate::values::{ExprList, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Expr(list) => write!(f, "{}", list),
        }
    }
}

impl fmt::Display for ExprList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, child) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

/// Render a value the way the REPL prints it.
pub fn render(value: &Value) -> String {
    value.to_string()
}
