//! Parse error types for calculator input.

use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    ///
    /// `column` is 1-based and counts characters from the start of the input
    /// line (calculator input is always a single line).
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// Empty or whitespace-only input.
    #[error("empty expression")]
    Empty,
}

impl ParseError {
    /// The 1-based column this error points at, if it carries one.
    pub fn column(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { column, .. } => Some(*column),
            ParseError::Empty => None,
        }
    }
}
