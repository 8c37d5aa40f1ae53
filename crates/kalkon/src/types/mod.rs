//! Core value types shared by the parser, evaluator, and session.

mod value;

pub use value::Value;
