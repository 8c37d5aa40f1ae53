//! Builtin function registry.
//!
//! Builtins operate on `Value` so integer-preserving functions (`abs`, `min`,
//! `floor`, ...) can stay integral while the transcendental functions promote
//! to float.

use std::collections::HashMap;

use crate::evaluator::EvalError;
use crate::types::Value;

/// Builtin function signature.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, EvalError>;

/// A named builtin with a fixed arity.
#[derive(Clone, Copy)]
pub struct Builtin {
    arity: usize,
    apply: BuiltinFn,
}

impl Builtin {
    /// Number of arguments this builtin takes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Apply the builtin. The caller has already checked arity.
    pub fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.apply)(args)
    }
}

/// Registry of builtin functions, keyed by name.
pub struct FunctionRegistry {
    builtins: HashMap<&'static str, Builtin>,
}

impl FunctionRegistry {
    /// Create a registry with the full builtin set.
    pub fn new() -> Self {
        let mut registry = Self {
            builtins: HashMap::new(),
        };

        registry.register("sin", 1, |args| float_fn("sin", args[0], f64::sin));
        registry.register("cos", 1, |args| float_fn("cos", args[0], f64::cos));
        registry.register("tan", 1, |args| float_fn("tan", args[0], f64::tan));
        registry.register("asin", 1, |args| float_fn("asin", args[0], f64::asin));
        registry.register("acos", 1, |args| float_fn("acos", args[0], f64::acos));
        registry.register("atan", 1, |args| float_fn("atan", args[0], f64::atan));
        registry.register("sinh", 1, |args| float_fn("sinh", args[0], f64::sinh));
        registry.register("cosh", 1, |args| float_fn("cosh", args[0], f64::cosh));
        registry.register("tanh", 1, |args| float_fn("tanh", args[0], f64::tanh));
        registry.register("exp", 1, |args| float_fn("exp", args[0], f64::exp));
        registry.register("sqrt", 1, |args| float_fn("sqrt", args[0], f64::sqrt));
        registry.register("atan2", 2, |args| {
            float_fn2("atan2", args[0], args[1], f64::atan2)
        });

        // log and ln are both the natural logarithm
        registry.register("log", 1, |args| log_fn("log", args[0], f64::ln));
        registry.register("ln", 1, |args| log_fn("ln", args[0], f64::ln));
        registry.register("log2", 1, |args| log_fn("log2", args[0], f64::log2));
        registry.register("log10", 1, |args| log_fn("log10", args[0], f64::log10));

        registry.register("abs", 1, |args| abs(args[0]));
        registry.register("floor", 1, |args| rounding("floor", args[0], f64::floor));
        registry.register("ceil", 1, |args| rounding("ceil", args[0], f64::ceil));
        registry.register("round", 1, |args| rounding("round", args[0], f64::round));
        registry.register("trunc", 1, |args| rounding("trunc", args[0], f64::trunc));

        registry.register("min", 2, |args| extremum(args[0], args[1], true));
        registry.register("max", 2, |args| extremum(args[0], args[1], false));

        registry
    }

    /// Get a builtin by name.
    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    /// All registered names, for suggestion computation.
    pub fn names(&self) -> Vec<String> {
        self.builtins.keys().map(|name| (*name).to_string()).collect()
    }

    fn register(&mut self, name: &'static str, arity: usize, apply: BuiltinFn) {
        self.builtins.insert(name, Builtin { arity, apply });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a float function, classifying non-finite results.
fn float_fn(name: &'static str, arg: Value, f: fn(f64) -> f64) -> Result<Value, EvalError> {
    classify(name, f(arg.as_f64()))
}

/// Apply a two-argument float function.
fn float_fn2(
    name: &'static str,
    a: Value,
    b: Value,
    f: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    classify(name, f(a.as_f64(), b.as_f64()))
}

/// Logarithms reject non-positive arguments up front.
fn log_fn(name: &'static str, arg: Value, f: fn(f64) -> f64) -> Result<Value, EvalError> {
    let x = arg.as_f64();
    if x <= 0.0 {
        return Err(EvalError::Domain {
            function: name.to_string(),
        });
    }
    classify(name, f(x))
}

fn classify(name: &'static str, result: f64) -> Result<Value, EvalError> {
    if result.is_finite() {
        Ok(Value::Float(result))
    } else if result.is_nan() {
        Err(EvalError::Domain {
            function: name.to_string(),
        })
    } else {
        Err(EvalError::Overflow { operation: name })
    }
}

fn abs(arg: Value) -> Result<Value, EvalError> {
    match arg {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or(EvalError::Overflow { operation: "abs" }),
        Value::Float(x) => Ok(Value::Float(x.abs())),
    }
}

/// Rounding functions keep integers intact and return an integer whenever
/// the rounded float fits `i64`.
fn rounding(name: &'static str, arg: Value, f: fn(f64) -> f64) -> Result<Value, EvalError> {
    match arg {
        Value::Int(n) => Ok(Value::Int(n)),
        Value::Float(x) => {
            let rounded = f(x);
            if !rounded.is_finite() {
                return classify(name, rounded);
            }
            // i64 range check in f64: 2^63 is exactly representable
            if rounded >= -(2f64.powi(63)) && rounded < 2f64.powi(63) {
                Ok(Value::Int(rounded as i64))
            } else {
                Ok(Value::Float(rounded))
            }
        }
    }
}

fn extremum(a: Value, b: Value, want_min: bool) -> Result<Value, EvalError> {
    // Stored values are never NaN, so the comparison is total.
    let a_less = a.as_f64() <= b.as_f64();
    Ok(if a_less == want_min { a } else { b })
}
