//! The Lispy evaluation engine.

use pest::iterators::Pair;
use tracing::debug;

use super::{EngineOptions, Error};
use crate::{
    evaluator, parser,
    parser::Rule,
    reader,
    values::Value,
};

/// Runs lines of Lispy source from text to value.
///
/// The engine holds configuration only; every call works on a fresh tree and
/// nothing carries over between lines.
///
/// # Example
///
/// ```
/// use lispy_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let result = engine.run("(+ 1 (* 2 3))").unwrap();
/// assert_eq!(result.to_string(), "7");
///
/// // Evaluation errors are values, not `Err`.
/// let result = engine.run("(/ 1 0)").unwrap();
/// assert_eq!(result.to_string(), "Error: division by zero");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse `source` into its parse tree.
    pub fn parse<'s>(&self, source: &'s str) -> Result<Pair<'s, Rule>, Error> {
        parser::parse_with_max_depth(source, self.options.max_depth).map_err(|err| {
            debug!(%err, "parse failed");
            Error::from_parse_error(&err, source)
        })
    }

    /// Parse and read `source` without evaluating it.
    pub fn read(&self, source: &str) -> Result<Value, Error> {
        let tree = self.parse(source)?;
        Ok(reader::read(&tree))
    }

    /// Parse, read and evaluate `source`.
    ///
    /// Only grammar failures are returned as `Err`; anything that goes wrong
    /// during evaluation is an error value in the `Ok` result.
    pub fn run(&self, source: &str) -> Result<Value, Error> {
        let tree = self.parse(source)?;
        let result = evaluator::evaluate(&tree);
        debug!(kind = ?result.kind(), "evaluated");
        Ok(result)
    }
}
