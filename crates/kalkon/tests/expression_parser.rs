//! Integration tests for expression parsing.
//!
//! These tests validate the public parser API: literal forms, the operator
//! precedence ladder, assignment statements, and error positions.

use kalkon::parser::ast::{BinaryOp, Expr, Statement, UnaryOp};
use kalkon::{ParseError, Value, parse_expression, parse_statement};

fn int(n: i64) -> Expr {
    Expr::Literal(Value::Int(n))
}

fn float(x: f64) -> Expr {
    Expr::Literal(Value::Float(x))
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_integer_literal() {
    assert_eq!(parse_expression("42").unwrap(), int(42));
}

#[test]
fn test_float_literal() {
    assert_eq!(parse_expression("2.5").unwrap(), float(2.5));
}

#[test]
fn test_float_without_leading_digit() {
    assert_eq!(parse_expression(".5").unwrap(), float(0.5));
}

#[test]
fn test_scientific_notation() {
    assert_eq!(parse_expression("1e3").unwrap(), float(1000.0));
    assert_eq!(parse_expression("2.5e-2").unwrap(), float(0.025));
}

#[test]
fn test_hex_literal() {
    assert_eq!(parse_expression("0xff").unwrap(), int(255));
}

#[test]
fn test_octal_literal() {
    assert_eq!(parse_expression("0o17").unwrap(), int(15));
}

#[test]
fn test_binary_literal() {
    assert_eq!(parse_expression("0b101").unwrap(), int(5));
}

#[test]
fn test_full_width_hex_literal_wraps() {
    assert_eq!(parse_expression("0xffffffffffffffff").unwrap(), int(-1));
}

#[test]
fn test_huge_decimal_literal_becomes_float() {
    // Does not fit i64, falls back to a float literal
    let parsed = parse_expression("99999999999999999999").unwrap();
    assert!(matches!(parsed, Expr::Literal(Value::Float(_))));
}

// =============================================================================
// Precedence and associativity
// =============================================================================

#[test]
fn test_addition() {
    assert_eq!(
        parse_expression("2+2").unwrap(),
        Expr::binary(BinaryOp::Add, int(2), int(2))
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expression("2+3*4").unwrap(),
        Expr::binary(
            BinaryOp::Add,
            int(2),
            Expr::binary(BinaryOp::Mul, int(3), int(4))
        )
    );
}

#[test]
fn test_parentheses_group() {
    assert_eq!(
        parse_expression("(2+3)*4").unwrap(),
        Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, int(2), int(3)),
            int(4)
        )
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        parse_expression("2^3^2").unwrap(),
        Expr::binary(
            BinaryOp::Pow,
            int(2),
            Expr::binary(BinaryOp::Pow, int(3), int(2))
        )
    );
}

#[test]
fn test_double_star_is_power() {
    assert_eq!(
        parse_expression("2**3").unwrap(),
        Expr::binary(BinaryOp::Pow, int(2), int(3))
    );
}

#[test]
fn test_unary_minus_binds_tighter_than_power() {
    assert_eq!(
        parse_expression("-2^2").unwrap(),
        Expr::binary(BinaryOp::Pow, Expr::unary(UnaryOp::Neg, int(2)), int(2))
    );
}

#[test]
fn test_power_exponent_may_be_signed() {
    assert_eq!(
        parse_expression("2^-3").unwrap(),
        Expr::binary(BinaryOp::Pow, int(2), Expr::unary(UnaryOp::Neg, int(3)))
    );
}

#[test]
fn test_unary_minus_before_addition() {
    assert_eq!(
        parse_expression("-3+5").unwrap(),
        Expr::binary(BinaryOp::Add, Expr::unary(UnaryOp::Neg, int(3)), int(5))
    );
}

#[test]
fn test_floor_division_token() {
    assert_eq!(
        parse_expression("7//2").unwrap(),
        Expr::binary(BinaryOp::FloorDiv, int(7), int(2))
    );
}

#[test]
fn test_bitwise_precedence() {
    // shifts bind tighter than &, which binds tighter than |
    assert_eq!(
        parse_expression("1|2&3<<4").unwrap(),
        Expr::binary(
            BinaryOp::BitOr,
            int(1),
            Expr::binary(
                BinaryOp::BitAnd,
                int(2),
                Expr::binary(BinaryOp::Shl, int(3), int(4))
            )
        )
    );
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(
        parse_expression("  2 + 2  ").unwrap(),
        parse_expression("2+2").unwrap()
    );
}

// =============================================================================
// Identifiers and calls
// =============================================================================

#[test]
fn test_identifier() {
    assert_eq!(
        parse_expression("pi").unwrap(),
        Expr::Identifier("pi".to_string())
    );
}

#[test]
fn test_function_call() {
    assert_eq!(
        parse_expression("atan2(1, 2)").unwrap(),
        Expr::Call {
            name: "atan2".to_string(),
            args: vec![int(1), int(2)],
        }
    );
}

#[test]
fn test_nested_call() {
    assert_eq!(
        parse_expression("abs(sin(1))").unwrap(),
        Expr::Call {
            name: "abs".to_string(),
            args: vec![Expr::Call {
                name: "sin".to_string(),
                args: vec![int(1)],
            }],
        }
    );
}

#[test]
fn test_empty_argument_list() {
    assert_eq!(
        parse_expression("foo()").unwrap(),
        Expr::Call {
            name: "foo".to_string(),
            args: vec![],
        }
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_assignment_statement() {
    assert_eq!(
        parse_statement("x = 3*4").unwrap(),
        Statement::Assignment {
            name: "x".to_string(),
            value: Expr::binary(BinaryOp::Mul, int(3), int(4)),
        }
    );
}

#[test]
fn test_bare_expression_statement() {
    assert_eq!(
        parse_statement("1+1").unwrap(),
        Statement::Expression(Expr::binary(BinaryOp::Add, int(1), int(1)))
    );
}

#[test]
fn test_double_equals_is_rejected() {
    let err = parse_statement("x == 3").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse_statement("").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_statement("   ").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_error_carries_column() {
    let err = parse_expression("2 + $").unwrap_err();
    assert_eq!(err.column(), Some(5));
}

#[test]
fn test_trailing_garbage() {
    let err = parse_expression("2 2").unwrap_err();
    let ParseError::Syntax { column, message } = err else {
        panic!("expected syntax error");
    };
    assert_eq!(column, 3);
    assert!(message.contains("unexpected character"));
}

#[test]
fn test_unclosed_paren_is_an_error() {
    assert!(parse_expression("(1+2").is_err());
}

#[test]
fn test_dangling_operator_is_an_error() {
    assert!(parse_expression("2 +").is_err());
}
