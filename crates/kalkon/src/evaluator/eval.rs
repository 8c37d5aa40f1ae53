//! Tree-walking evaluation engine for calculator expressions.
//!
//! This module provides the core evaluation logic that reduces a parsed
//! expression to a single value. Integer arithmetic is checked (overflow is
//! an error, never a wrap), mixed-type operations promote to float, and a
//! zero divisor is always reported rather than producing an infinity or NaN.

use crate::evaluator::error::compute_suggestions;
use crate::evaluator::{Environment, EvalError};
use crate::parser::ast::{BinaryOp, Expr, UnaryOp};
use crate::types::Value;

/// Evaluate an expression against an environment.
///
/// Evaluation is a pure function of the expression and the environment:
/// the same inputs always produce the same result.
///
/// # Errors
///
/// Returns an error if:
/// - An identifier or function name cannot be resolved
/// - A divisor is zero
/// - A result exceeds the representable range
/// - A function argument is outside its domain
/// - A bitwise operator receives a float operand
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Identifier(name) => env.lookup(name).ok_or_else(|| EvalError::UnknownSymbol {
            name: name.clone(),
            suggestions: compute_suggestions(name, &env.symbol_names()),
        }),
        Expr::Call { name, args } => {
            let Some(builtin) = env.function(name) else {
                return Err(EvalError::UnknownSymbol {
                    name: name.clone(),
                    suggestions: compute_suggestions(name, &env.callable_names()),
                });
            };
            if args.len() != builtin.arity() {
                return Err(EvalError::ArgumentCount {
                    function: name.clone(),
                    expected: builtin.arity(),
                    got: args.len(),
                });
            }
            let values = args
                .iter()
                .map(|arg| evaluate(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            builtin.call(&values)
        }
        Expr::Unary { op, operand } => {
            let value = evaluate(operand, env)?;
            apply_unary(*op, value)
        }
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, env)?;
            let rhs = evaluate(rhs, env)?;
            apply_binary(*op, lhs, rhs)
        }
    }
}

fn apply_unary(op: UnaryOp, value: Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Neg => match value {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or(EvalError::Overflow { operation: "-" }),
            Value::Float(x) => Ok(Value::Float(-x)),
        },
        UnaryOp::Not => match value {
            Value::Int(n) => Ok(Value::Int(!n)),
            Value::Float(_) => Err(EvalError::InvalidOperand {
                op: "~",
                reason: "expected integer operand",
            }),
        },
    }
}

fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    use Value::Int;

    match op {
        BinaryOp::Add => match (lhs, rhs) {
            (Int(a), Int(b)) => a
                .checked_add(b)
                .map(Int)
                .ok_or(EvalError::Overflow { operation: "+" }),
            _ => float_binary("+", lhs, rhs, |a, b| a + b),
        },
        BinaryOp::Sub => match (lhs, rhs) {
            (Int(a), Int(b)) => a
                .checked_sub(b)
                .map(Int)
                .ok_or(EvalError::Overflow { operation: "-" }),
            _ => float_binary("-", lhs, rhs, |a, b| a - b),
        },
        BinaryOp::Mul => match (lhs, rhs) {
            (Int(a), Int(b)) => a
                .checked_mul(b)
                .map(Int)
                .ok_or(EvalError::Overflow { operation: "*" }),
            _ => float_binary("*", lhs, rhs, |a, b| a * b),
        },
        BinaryOp::Div => {
            // True division always produces a float
            if rhs.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            float_binary("/", lhs, rhs, |a, b| a / b)
        }
        BinaryOp::FloorDiv => floor_div(lhs, rhs),
        BinaryOp::Rem => floored_rem(lhs, rhs),
        BinaryOp::Pow => pow(lhs, rhs),
        BinaryOp::BitAnd => int_binary("&", lhs, rhs, |a, b| Ok(a & b)),
        BinaryOp::BitOr => int_binary("|", lhs, rhs, |a, b| Ok(a | b)),
        BinaryOp::Shl => int_binary("<<", lhs, rhs, shl),
        BinaryOp::Shr => int_binary(">>", lhs, rhs, shr),
    }
}

/// Promote to float, apply, and classify non-finite results.
fn float_binary(
    op: &'static str,
    lhs: Value,
    rhs: Value,
    f: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let result = f(lhs.as_f64(), rhs.as_f64());
    if result.is_finite() {
        Ok(Value::Float(result))
    } else if result.is_nan() {
        Err(EvalError::Domain {
            function: op.to_string(),
        })
    } else {
        Err(EvalError::Overflow { operation: op })
    }
}

/// Require two integer operands.
fn int_binary(
    op: &'static str,
    lhs: Value,
    rhs: Value,
    f: fn(i64, i64) -> Result<i64, EvalError>,
) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => f(a, b).map(Value::Int),
        _ => Err(EvalError::InvalidOperand {
            op,
            reason: "expected integer operands",
        }),
    }
}

/// Floor division: rounds toward negative infinity. Two integers produce
/// an integer.
fn floor_div(lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let quotient = a
                .checked_div(b)
                .ok_or(EvalError::Overflow { operation: "//" })?;
            let remainder = a % b;
            let floored = if remainder != 0 && (remainder < 0) != (b < 0) {
                quotient - 1
            } else {
                quotient
            };
            Ok(Value::Int(floored))
        }
        _ => float_binary("//", lhs, rhs, |a, b| (a / b).floor()),
    }
}

/// Floored modulo: the result takes the divisor's sign.
fn floored_rem(lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let remainder = a
                .checked_rem(b)
                .ok_or(EvalError::Overflow { operation: "%" })?;
            let floored = if remainder != 0 && (remainder < 0) != (b < 0) {
                remainder + b
            } else {
                remainder
            };
            Ok(Value::Int(floored))
        }
        _ => float_binary("%", lhs, rhs, |a, b| {
            let remainder = a % b;
            if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
                remainder + b
            } else {
                remainder
            }
        }),
    }
}

/// Exponentiation. Two integers with a non-negative exponent stay integral;
/// a negative exponent produces a float; a negative power of zero is a
/// division by zero.
fn pow(lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    if lhs.is_zero() && rhs.is_negative() {
        return Err(EvalError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) if b >= 0 => {
            let exponent =
                u32::try_from(b).map_err(|_| EvalError::Overflow { operation: "^" })?;
            a.checked_pow(exponent)
                .map(Value::Int)
                .ok_or(EvalError::Overflow { operation: "^" })
        }
        _ => float_binary("^", lhs, rhs, f64::powf),
    }
}

fn shl(a: i64, b: i64) -> Result<i64, EvalError> {
    if b < 0 {
        return Err(EvalError::InvalidOperand {
            op: "<<",
            reason: "negative shift count",
        });
    }
    if b >= 64 {
        return Err(EvalError::Overflow { operation: "<<" });
    }
    let shifted = a << b;
    // Round-trip check detects bits shifted past the sign boundary
    if (shifted >> b) != a {
        return Err(EvalError::Overflow { operation: "<<" });
    }
    Ok(shifted)
}

fn shr(a: i64, b: i64) -> Result<i64, EvalError> {
    if b < 0 {
        return Err(EvalError::InvalidOperand {
            op: ">>",
            reason: "negative shift count",
        });
    }
    if b >= 64 {
        return Ok(if a < 0 { -1 } else { 0 });
    }
    Ok(a >> b)
}
