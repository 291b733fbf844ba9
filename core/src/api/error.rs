//! Public error types for the Lispy API.
//!
//! Evaluation failures are ordinary values and never show up here. This
//! module covers what goes wrong before evaluation starts: the line could
//! not be parsed.

use core::fmt;

use thiserror::Error;

use crate::parser::{ParseError, Span};

/// Public error type for all Lispy operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The source text did not match the grammar.
    #[error("{diagnostic}")]
    Parse {
        diagnostic: Diagnostic,
        source_text: String,
    },
}

impl Error {
    pub fn from_parse_error(err: &ParseError, source_text: &str) -> Self {
        Error::Parse {
            diagnostic: err.to_diagnostic(),
            source_text: source_text.to_string(),
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Parse { diagnostic, .. } => diagnostic,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Error::Parse { source_text, .. } => source_text,
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001").
    pub code: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        Ok(())
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
