//! Configuration options for the Lispy engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the Lispy engine.
///
/// # Example
///
/// ```
/// use lispy_core::api::EngineOptions;
///
/// let options = EngineOptions { max_depth: 64 };
/// assert!(options.max_depth < EngineOptions::default().max_depth);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum parenthesis nesting accepted from the source text.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
