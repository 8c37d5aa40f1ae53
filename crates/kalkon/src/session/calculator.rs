//! The calculator session.
//!
//! `Calculator` is the user-facing stateful object tying the parser,
//! evaluator, history, and output formatting together. Front-ends feed it
//! one input line at a time, either committing (`submit`) or previewing
//! (`preview`), and render the returned `Outcome`.

use bon::Builder;

use crate::error::CalcError;
use crate::evaluator::{Environment, evaluate};
use crate::parser::ast::Statement;
use crate::parser::parse_statement;
use crate::session::command::Command;
use crate::session::format::{IntegerWidth, Radix, format_value};
use crate::session::history::History;
use crate::types::Value;

/// Outcome of processing one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The input evaluated to a value.
    Value { value: Value, display: String },
    /// The input was an assignment. The binding only takes effect on
    /// `submit`; a `preview` reports the would-be value without binding.
    Assigned { name: String, value: Value },
    /// The input was a recognized session command. The command only takes
    /// effect on `submit`.
    Command(Command),
    /// The input failed to parse or evaluate. The session state is
    /// untouched.
    Error(CalcError),
}

impl Outcome {
    /// Check if this outcome is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Get the computed value, if the input produced one.
    pub fn value(&self) -> Option<Value> {
        match self {
            Outcome::Value { value, .. } | Outcome::Assigned { value, .. } => Some(*value),
            Outcome::Command(_) | Outcome::Error(_) => None,
        }
    }
}

/// A calculator session.
///
/// Owns the variable environment and the evaluation history. Evaluation
/// itself is pure; all state changes happen through `submit`.
///
/// # Example
///
/// ```
/// use kalkon::{Calculator, Value};
///
/// let mut calc = Calculator::new();
/// let outcome = calc.submit("2 + 2");
/// assert_eq!(outcome.value(), Some(Value::Int(4)));
/// assert_eq!(calc.history().len(), 1);
/// ```
#[derive(Builder)]
pub struct Calculator {
    /// Output radix for integer results.
    #[builder(default)]
    radix: Radix,

    /// Integer display width.
    #[builder(default)]
    width: IntegerWidth,

    /// History store. Configure retention via [`History::with_policy`].
    #[builder(default)]
    history: History,

    /// Variable bindings and builtin tables.
    #[builder(skip)]
    env: Environment,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::builder().build()
    }
}

impl Calculator {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input line and commit its effects: successful expression
    /// evaluations are appended to history, assignments bind their variable,
    /// and commands take effect.
    pub fn submit(&mut self, input: &str) -> Outcome {
        self.process(input, true)
    }

    /// Process an input line without committing anything. Mirrors live
    /// evaluation of an input field as the user types.
    pub fn preview(&mut self, input: &str) -> Outcome {
        self.process(input, false)
    }

    fn process(&mut self, input: &str, commit: bool) -> Outcome {
        if let Some(parsed) = Command::parse(input) {
            return match parsed {
                Ok(command) => {
                    if commit {
                        self.apply(command);
                    }
                    Outcome::Command(command)
                }
                Err(e) => Outcome::Error(e),
            };
        }

        let statement = match parse_statement(input) {
            Ok(statement) => statement,
            Err(e) => return Outcome::Error(e.into()),
        };

        match statement {
            Statement::Assignment { name, value } => match evaluate(&value, &self.env) {
                Ok(value) => {
                    if commit {
                        self.env.assign(name.clone(), value);
                    }
                    Outcome::Assigned { name, value }
                }
                Err(e) => Outcome::Error(e.into()),
            },
            Statement::Expression(expr) => match evaluate(&expr, &self.env) {
                Ok(value) => {
                    let display = self.format(value);
                    if commit {
                        self.history.append(input.trim(), value, display.clone());
                    }
                    Outcome::Value { value, display }
                }
                Err(e) => Outcome::Error(e.into()),
            },
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Radix(radix) => self.radix = radix,
            Command::Width(width) => self.width = width,
            Command::Clear => self.history.clear(),
        }
    }

    /// Render a value using the session's current radix and width.
    pub fn format(&self, value: Value) -> String {
        format_value(value, self.radix, self.width)
    }

    /// The evaluation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current output radix.
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// The current integer display width.
    pub fn width(&self) -> IntegerWidth {
        self.width
    }

    /// Look up a bound variable or constant.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.env.lookup(name)
    }
}
