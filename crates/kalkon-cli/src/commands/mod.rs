//! CLI command implementations.

mod eval;
mod repl;

pub use eval::{run_eval, EvalArgs};
pub use repl::run_repl;
