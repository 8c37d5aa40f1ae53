pub mod evaluator;
pub mod parser;
pub mod session;
pub mod types;

mod error;

pub use error::CalcError;
pub use evaluator::{Environment, EvalError, compute_suggestions, evaluate};
pub use parser::{ParseError, parse_expression, parse_statement};
pub use session::{
    Calculator, Command, History, HistoryEntry, IntegerWidth, Outcome, Radix, RetentionPolicy,
    format_value,
};
pub use types::Value;
