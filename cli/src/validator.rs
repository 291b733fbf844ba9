use reedline::{ValidationResult, Validator};

use crate::lexer::calculate_depth;

/// Keeps the editor open while a list is still unclosed.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
