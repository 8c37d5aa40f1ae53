//! The unified error type surfaced to front-ends.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::ParseError;

/// Any error a calculator session can report for one input line.
///
/// All variants are recoverable: the session state is left untouched and the
/// next input is processed normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input parsed but failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The input started with `:` but named no known command.
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },
}
