//! Error types for the expression evaluator.

use thiserror::Error;

/// An error that occurred during expression evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Unknown variable, constant, or function name.
    #[error("unknown symbol '{name}'{}", suggestion_suffix(suggestions))]
    UnknownSymbol {
        name: String,
        suggestions: Vec<String>,
    },

    /// Zero right operand for `/`, `//`, `%`, or a negative power of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Result exceeds the representable range.
    #[error("overflow in '{operation}'")]
    Overflow { operation: &'static str },

    /// Argument outside a function's mathematical domain.
    #[error("math domain error in '{function}'")]
    Domain { function: String },

    /// Wrong number of arguments passed to a builtin function.
    #[error("function '{function}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    /// Operand type not accepted by the operator.
    #[error("invalid operand for '{op}': {reason}")]
    InvalidOperand {
        op: &'static str,
        reason: &'static str,
    },
}

/// Render a "did you mean" suffix for a suggestion list.
fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three name suggestions by edit distance.
///
/// Short targets (three characters or fewer) only tolerate distance 1;
/// longer targets tolerate distance 2. Closest matches come first.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|name| (strsim::levenshtein(target, name), name))
        .filter(|(distance, _)| *distance <= max_distance && *distance > 0)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.clone())
        .collect()
}
