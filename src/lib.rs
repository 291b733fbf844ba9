//! Lispy - A tiny Lisp-flavored arithmetic language
//!
//! # Overview
//!
//! Lispy evaluates prefix arithmetic over 64-bit integers:
//!
//! ```text
//! lispy> (+ 1 (* 2 3))
//! 7
//! lispy> (- 5)
//! -5
//! lispy> (/ 1 0)
//! Error: division by zero
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Engine, EngineOptions, render};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let value = engine.run("(* 2 3 4)").unwrap();
//! assert_eq!(render(&value), "24");
//! ```
//!
//! Evaluation never fails out-of-band: division by zero, bad operands and
//! the like come back as [`Value::Error`]. Only text that does not parse is
//! reported through [`Error`], which [`render_error`] pretty-prints.

pub mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from lispy_core
pub use lispy_core::api::{Diagnostic, Engine, EngineOptions, Error, Severity};

// Re-export commonly used types and values
pub use lispy_core::values::{self, ExprList, Value, ValueKind, render};

// Re-export the evaluator entry points and its error type
pub use lispy_core::evaluator::{EvalError, eval, evaluate};
