//! Miette diagnostic wrapper for expression syntax errors.

use kalkon::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for expression syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(kalkon::syntax))]
pub struct SyntaxDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl SyntaxDiagnostic {
    /// Create a diagnostic from a ParseError with the expression as source.
    pub fn from_parse_error(expression: &str, err: &ParseError) -> Self {
        let (column, message) = match err {
            ParseError::Syntax { column, message } => (*column, message.clone()),
            ParseError::Empty => (1, "empty expression".to_string()),
        };

        // Convert the 1-based character column to a byte offset, clamped to
        // the expression length to avoid miette panics on out-of-bounds.
        let offset = expression
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(expression.len(), |(i, _)| i);

        SyntaxDiagnostic {
            src: NamedSource::new("expression", expression.to_string()),
            span: (offset, 1).into(),
            message,
            help: None,
        }
    }
}
