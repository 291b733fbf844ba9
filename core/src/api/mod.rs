//! Public API for the Lispy language.
//!
//! # Example
//!
//! ```
//! use lispy_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let value = engine.run("(- 5)").unwrap();
//! assert_eq!(value.as_number(), Some(-5));
//! ```

pub mod engine;
pub mod error;
pub mod options;

#[cfg(test)]
mod engine_test;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::EngineOptions;
