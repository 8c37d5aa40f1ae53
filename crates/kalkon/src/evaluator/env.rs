//! Evaluation environment: variables, constants, and builtin functions.

use std::collections::HashMap;

use crate::evaluator::functions::{Builtin, FunctionRegistry};
use crate::types::Value;

/// Named constants available in every environment.
const CONSTANTS: [(&str, f64); 3] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
    ("tau", std::f64::consts::TAU),
];

/// The name-resolution environment for expression evaluation.
///
/// Lookup order is variables first, then constants, so a user binding may
/// shadow `pi`. Function names live in their own namespace: binding a
/// variable named `sin` does not affect `sin(x)` calls.
pub struct Environment {
    variables: HashMap<String, Value>,
    functions: FunctionRegistry,
}

impl Environment {
    /// Create an environment with no user variables.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            functions: FunctionRegistry::new(),
        }
    }

    /// Resolve an identifier to a value.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.variables.get(name) {
            return Some(*value);
        }
        CONSTANTS
            .iter()
            .find(|(constant, _)| *constant == name)
            .map(|(_, x)| Value::Float(*x))
    }

    /// Bind a variable, replacing any previous binding.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Look up a builtin function.
    pub fn function(&self, name: &str) -> Option<&Builtin> {
        self.functions.get(name)
    }

    /// Names visible to bare identifiers, for suggestion computation.
    pub fn symbol_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variables.keys().cloned().collect();
        names.extend(CONSTANTS.iter().map(|(name, _)| (*name).to_string()));
        names.sort();
        names
    }

    /// Names callable as functions, for suggestion computation.
    pub fn callable_names(&self) -> Vec<String> {
        let mut names = self.functions.names();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
