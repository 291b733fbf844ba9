use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::trace;

use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::syntax::Span;

/// Nesting limit applied by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 1000;

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse one line of Lispy into its `program` node.
pub fn parse(source: &str) -> Result<Pair<'_, Rule>, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse one line of Lispy, rejecting lists nested deeper than `max_depth`.
///
/// The nesting check runs on the raw text before the grammar does, so a
/// pathological input never reaches the recursive descent.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Pair<'_, Rule>, ParseError> {
    let nesting = Nesting::scan(source, max_depth);
    if let Some(offset) = nesting.too_deep {
        return Err(ParseError::new(
            ParseErrorKind::MaxDepthExceeded {
                depth: nesting.max_depth,
                max_depth,
            },
            Span::new(offset, offset + 1),
        ));
    }

    let mut pairs = LispyParser::parse(Rule::program, source).map_err(|err| {
        match nesting.unclosed {
            Some(offset) => ParseError::new(
                ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
                Span::new(offset, offset + 1),
            ),
            None => convert_pest_error(err, source),
        }
    })?;

    let program = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            Span::new(0, source.len()),
        )
    })?;
    trace!(len = source.len(), "parsed");
    Ok(program)
}

/// Parenthesis bookkeeping gathered in a single pass over the source.
struct Nesting {
    max_depth: usize,
    /// Offset of the first `(` that opens a level beyond the limit.
    too_deep: Option<usize>,
    /// Offset of the outermost `(` that is never closed.
    unclosed: Option<usize>,
}

impl Nesting {
    fn scan(source: &str, limit: usize) -> Self {
        let mut stack = Vec::new();
        let mut max_depth = 0;
        let mut too_deep = None;
        for (offset, byte) in source.bytes().enumerate() {
            match byte {
                b'(' => {
                    stack.push(offset);
                    max_depth = max_depth.max(stack.len());
                    if stack.len() > limit && too_deep.is_none() {
                        too_deep = Some(offset);
                    }
                }
                b')' => {
                    stack.pop();
                }
                _ => {}
            }
        }
        Self {
            max_depth,
            too_deep,
            unclosed: stack.first().copied(),
        }
    }
}
