//! Integration tests for expression evaluation: arithmetic semantics,
//! promotion rules, builtin functions, and constants.

use kalkon::{Environment, EvalError, Value, evaluate, parse_expression};

fn eval(src: &str) -> Result<Value, EvalError> {
    let env = Environment::new();
    let expr = parse_expression(src).expect("expression should parse");
    evaluate(&expr, &env)
}

fn eval_ok(src: &str) -> Value {
    eval(src).expect("expression should evaluate")
}

// =============================================================================
// Integer arithmetic
// =============================================================================

#[test]
fn two_plus_two_is_four() {
    assert_eq!(eval_ok("2+2"), Value::Int(4));
}

#[test]
fn operator_precedence() {
    assert_eq!(eval_ok("10 + 5 * 2"), Value::Int(20));
    assert_eq!(eval_ok("(10 + 5) * 2"), Value::Int(30));
}

#[test]
fn unary_minus() {
    assert_eq!(eval_ok("-3+5"), Value::Int(2));
    assert_eq!(eval_ok("--4"), Value::Int(4));
}

#[test]
fn power_of_integers_stays_integral() {
    assert_eq!(eval_ok("2^3"), Value::Int(8));
    assert_eq!(eval_ok("2**10"), Value::Int(1024));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(eval_ok("2^3^2"), Value::Int(512));
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_eq!(eval_ok("-2^2"), Value::Int(4));
}

#[test]
fn negative_exponent_produces_float() {
    assert_eq!(eval_ok("2^-1"), Value::Float(0.5));
}

#[test]
fn true_division_produces_float() {
    assert_eq!(eval_ok("6/3"), Value::Float(2.0));
    assert_eq!(eval_ok("1/3"), Value::Float(1.0 / 3.0));
}

#[test]
fn floor_division() {
    assert_eq!(eval_ok("7//2"), Value::Int(3));
    assert_eq!(eval_ok("-7//2"), Value::Int(-4));
    assert_eq!(eval_ok("7.5//2"), Value::Float(3.0));
}

#[test]
fn modulo_takes_divisor_sign() {
    assert_eq!(eval_ok("7%3"), Value::Int(1));
    assert_eq!(eval_ok("-7%3"), Value::Int(2));
    assert_eq!(eval_ok("7%-3"), Value::Int(-2));
}

// =============================================================================
// Bitwise operators
// =============================================================================

#[test]
fn bitwise_and_or() {
    assert_eq!(eval_ok("0xff & 0b1010"), Value::Int(10));
    assert_eq!(eval_ok("0xf0 | 0x0f"), Value::Int(255));
}

#[test]
fn shifts() {
    assert_eq!(eval_ok("1 << 4"), Value::Int(16));
    assert_eq!(eval_ok("256 >> 4"), Value::Int(16));
    assert_eq!(eval_ok("-1 >> 100"), Value::Int(-1));
}

#[test]
fn bitwise_complement() {
    assert_eq!(eval_ok("~0"), Value::Int(-1));
}

// =============================================================================
// Promotion
// =============================================================================

#[test]
fn mixed_operands_promote_to_float() {
    assert_eq!(eval_ok("2.5 + 1"), Value::Float(3.5));
    assert_eq!(eval_ok("2 * 1.5"), Value::Float(3.0));
}

// =============================================================================
// Functions and constants
// =============================================================================

#[test]
fn trig_functions() {
    assert_eq!(eval_ok("sin(0)"), Value::Float(0.0));
    assert_eq!(eval_ok("cos(0)"), Value::Float(1.0));
}

#[test]
fn sqrt_of_sixteen() {
    assert_eq!(eval_ok("sqrt(16)"), Value::Float(4.0));
}

#[test]
fn abs_preserves_integers() {
    assert_eq!(eval_ok("abs(-5)"), Value::Int(5));
    assert_eq!(eval_ok("abs(-2.5)"), Value::Float(2.5));
}

#[test]
fn rounding_functions_return_integers() {
    assert_eq!(eval_ok("floor(2.7)"), Value::Int(2));
    assert_eq!(eval_ok("ceil(2.1)"), Value::Int(3));
    assert_eq!(eval_ok("trunc(-2.7)"), Value::Int(-2));
}

#[test]
fn min_max_return_the_argument() {
    assert_eq!(eval_ok("min(3, 2.5)"), Value::Float(2.5));
    assert_eq!(eval_ok("max(2, 10)"), Value::Int(10));
}

#[test]
fn log_is_natural() {
    assert_eq!(eval_ok("log(1)"), Value::Float(0.0));
    assert!((eval_ok("log(e)").as_f64() - 1.0).abs() < 1e-12);
    assert!((eval_ok("ln(e)").as_f64() - 1.0).abs() < 1e-12);
    assert_eq!(eval_ok("log2(8)"), Value::Float(3.0));
}

#[test]
fn constants() {
    assert_eq!(eval_ok("pi"), Value::Float(std::f64::consts::PI));
    assert_eq!(eval_ok("2 * pi"), Value::Float(std::f64::consts::TAU));
    assert_eq!(eval_ok("sin(pi / 2)"), Value::Float(1.0));
}

// =============================================================================
// Environment
// =============================================================================

#[test]
fn variables_resolve_through_the_environment() {
    let mut env = Environment::new();
    env.assign("x", Value::Int(7));
    let expr = parse_expression("x * 2").unwrap();
    assert_eq!(evaluate(&expr, &env), Ok(Value::Int(14)));
}

#[test]
fn variables_shadow_constants() {
    let mut env = Environment::new();
    env.assign("pi", Value::Int(3));
    let expr = parse_expression("pi").unwrap();
    assert_eq!(evaluate(&expr, &env), Ok(Value::Int(3)));
}

#[test]
fn evaluation_is_deterministic() {
    let env = Environment::new();
    let expr = parse_expression("sin(1.5) * 2^10 / 7").unwrap();
    let first = evaluate(&expr, &env);
    let second = evaluate(&expr, &env);
    assert_eq!(first, second);
}
