//! Expression parser using winnow.
//!
//! Parses calculator input into an AST. Handles:
//! - Numeric literals: integers, floats, `0x`/`0o`/`0b` radix prefixes
//! - The operator ladder, loosest to tightest:
//!   `|`, `&`, `<<` `>>`, `+` `-`, `*` `/` `//` `%`, unary `-` `~`, `^`/`**`
//! - Exponentiation is right-associative; unary minus binds tighter than
//!   every binary operator, so `-2^2` is `(-2)^2`
//! - Function calls with arguments and bare identifiers
//! - Assignment statements: `name = expr`

use super::ast::{BinaryOp, Expr, Statement, UnaryOp};
use super::error::ParseError;
use winnow::ascii::{digit0, digit1, hex_digit1, oct_digit1};
use winnow::combinator::{alt, delimited, opt, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::types::Value;

/// Parse a full input line into a statement.
///
/// Empty or whitespace-only input is reported as [`ParseError::Empty`] rather
/// than a syntax error, so front-ends can ignore it silently.
pub fn parse_statement(input: &str) -> Result<Statement, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some((name, value_src)) = split_assignment(input) {
        let offset = input.chars().count() - value_src.chars().count();
        let value = parse_expr_at(value_src, offset)?;
        return Ok(Statement::Assignment {
            name: name.to_string(),
            value,
        });
    }

    Ok(Statement::Expression(parse_expr_at(input, 0)?))
}

/// Parse a single expression (no assignment).
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    parse_expr_at(input, 0)
}

/// Split `name = expr` input into the target name and the value source.
///
/// Returns `None` when the input is not an assignment. A doubled `=` is left
/// for the expression parser to reject (there is no comparison operator).
fn split_assignment(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_start();
    let first = trimmed.chars().next()?;
    if !is_ident_start(first) {
        return None;
    }
    let ident_end = trimmed
        .char_indices()
        .find(|(_, c)| !is_ident_cont(*c))
        .map_or(trimmed.len(), |(i, _)| i);
    let name = &trimmed[..ident_end];
    let rest = trimmed[ident_end..].trim_start();
    let value_src = rest.strip_prefix('=')?;
    if value_src.starts_with('=') {
        return None;
    }
    Some((name, value_src))
}

/// Parse an expression, reporting error columns relative to the full line.
fn parse_expr_at(src: &str, column_offset: usize) -> Result<Expr, ParseError> {
    let mut remaining = src;
    match expr(&mut remaining) {
        Ok(e) => {
            if remaining.is_empty() {
                Ok(e)
            } else {
                Err(ParseError::Syntax {
                    column: column_offset + calculate_column(src, remaining),
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => Err(ParseError::Syntax {
            column: column_offset + calculate_column(src, remaining),
            message: format!("parse error: {e}"),
        }),
    }
}

/// Calculate a 1-based character column from original and remaining input.
fn calculate_column(original: &str, remaining: &str) -> usize {
    let consumed = original.len() - remaining.len();
    original[..consumed].chars().count() + 1
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a full expression: the `|` precedence level.
fn expr(input: &mut &str) -> ModalResult<Expr> {
    let mut lhs = bit_and(input)?;
    loop {
        let _ = ws(input)?;
        if opt('|').parse_next(input)?.is_none() {
            return Ok(lhs);
        }
        let rhs = bit_and(input)?;
        lhs = Expr::binary(BinaryOp::BitOr, lhs, rhs);
    }
}

/// Parse the `&` precedence level.
fn bit_and(input: &mut &str) -> ModalResult<Expr> {
    let mut lhs = shift(input)?;
    loop {
        let _ = ws(input)?;
        if opt('&').parse_next(input)?.is_none() {
            return Ok(lhs);
        }
        let rhs = shift(input)?;
        lhs = Expr::binary(BinaryOp::BitAnd, lhs, rhs);
    }
}

/// Parse the `<<`/`>>` precedence level.
fn shift(input: &mut &str) -> ModalResult<Expr> {
    let mut lhs = additive(input)?;
    loop {
        let _ = ws(input)?;
        let op = opt(alt((
            "<<".value(BinaryOp::Shl),
            ">>".value(BinaryOp::Shr),
        )))
        .parse_next(input)?;
        let Some(op) = op else {
            return Ok(lhs);
        };
        let rhs = additive(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parse the `+`/`-` precedence level.
fn additive(input: &mut &str) -> ModalResult<Expr> {
    let mut lhs = multiplicative(input)?;
    loop {
        let _ = ws(input)?;
        let op = opt(alt(('+'.value(BinaryOp::Add), '-'.value(BinaryOp::Sub)))).parse_next(input)?;
        let Some(op) = op else {
            return Ok(lhs);
        };
        let rhs = multiplicative(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parse the `*` `/` `//` `%` precedence level.
fn multiplicative(input: &mut &str) -> ModalResult<Expr> {
    let mut lhs = power(input)?;
    loop {
        let _ = ws(input)?;
        let op = opt(alt((
            "//".value(BinaryOp::FloorDiv),
            '*'.value(BinaryOp::Mul),
            '/'.value(BinaryOp::Div),
            '%'.value(BinaryOp::Rem),
        )))
        .parse_next(input)?;
        let Some(op) = op else {
            return Ok(lhs);
        };
        let rhs = power(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Parse the exponentiation level: `base ^ exponent`, right-associative.
///
/// The base is a unary expression, so `-2^2` negates before raising. The
/// exponent recurses into this level, which both makes `2^3^2` associate to
/// the right and lets the exponent carry its own sign (`2^-3`).
fn power(input: &mut &str) -> ModalResult<Expr> {
    let base = unary(input)?;
    let _ = ws(input)?;
    let op = opt(alt(("**".void(), '^'.void()))).parse_next(input)?;
    if op.is_none() {
        return Ok(base);
    }
    let exponent = power(input)?;
    Ok(Expr::binary(BinaryOp::Pow, base, exponent))
}

/// Parse unary prefixes: `-`, `+`, `~`.
fn unary(input: &mut &str) -> ModalResult<Expr> {
    let _ = ws(input)?;
    if opt('-').parse_next(input)?.is_some() {
        let operand = unary(input)?;
        return Ok(Expr::unary(UnaryOp::Neg, operand));
    }
    if opt('~').parse_next(input)?.is_some() {
        let operand = unary(input)?;
        return Ok(Expr::unary(UnaryOp::Not, operand));
    }
    if opt('+').parse_next(input)?.is_some() {
        // Unary plus is a no-op
        return unary(input);
    }
    atom(input)
}

/// Parse an atom: a parenthesized group, a literal, or an identifier/call.
fn atom(input: &mut &str) -> ModalResult<Expr> {
    alt((paren_group, number, call_or_identifier)).parse_next(input)
}

/// Parse a parenthesized subexpression.
fn paren_group(input: &mut &str) -> ModalResult<Expr> {
    delimited('(', expr, (ws, ')')).parse_next(input)
}

/// Parse an identifier, optionally followed by call arguments.
fn call_or_identifier(input: &mut &str) -> ModalResult<Expr> {
    let name = identifier(input)?;
    let args: Option<Vec<Expr>> = opt(call_args).parse_next(input)?;
    Ok(match args {
        Some(args) => Expr::Call {
            name: name.to_string(),
            args,
        },
        None => Expr::Identifier(name.to_string()),
    })
}

/// Parse call arguments: `(arg1, arg2, ...)`.
fn call_args(input: &mut &str) -> ModalResult<Vec<Expr>> {
    delimited(('(', ws), separated(0.., expr, (ws, ',', ws)), (ws, ')')).parse_next(input)
}

/// Parse a numeric literal.
fn number(input: &mut &str) -> ModalResult<Expr> {
    alt((radix_literal, dec_literal)).parse_next(input)
}

/// Parse a `0x`/`0o`/`0b` integer literal.
///
/// Values are read as `u64` and reinterpreted as `i64`, so the full 64-bit
/// pattern is writable: `0xffffffffffffffff` is `-1`.
fn radix_literal(input: &mut &str) -> ModalResult<Expr> {
    let (radix, digits): (u32, &str) = alt((
        (alt(("0x", "0X")), hex_digit1).map(|(_, d)| (16, d)),
        (alt(("0o", "0O")), oct_digit1).map(|(_, d)| (8, d)),
        (alt(("0b", "0B")), take_while(1.., ['0', '1'])).map(|(_, d)| (2, d)),
    ))
    .parse_next(input)?;

    match u64::from_str_radix(digits, radix) {
        Ok(bits) => Ok(Expr::Literal(Value::Int(bits as i64))),
        Err(_) => Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        )),
    }
}

/// Parse a decimal integer or float literal.
///
/// A literal containing `.` or an exponent is a float. A plain integer that
/// does not fit `i64` falls back to a float literal.
fn dec_literal(input: &mut &str) -> ModalResult<Expr> {
    let literal: &str = alt((
        (digit1, opt(('.', digit0)), opt(exponent_part)).take(),
        ('.', digit1, opt(exponent_part)).take(),
    ))
    .parse_next(input)?;

    let value = if literal
        .bytes()
        .any(|b| matches!(b, b'.' | b'e' | b'E'))
    {
        literal.parse::<f64>().ok().map(Value::Float)
    } else {
        match literal.parse::<i64>() {
            Ok(n) => Some(Value::Int(n)),
            Err(_) => literal.parse::<f64>().ok().map(Value::Float),
        }
    };

    match value {
        Some(v) => Ok(Expr::Literal(v)),
        None => Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        )),
    }
}

/// Parse the exponent suffix of a float literal: `e-3`, `E+10`.
fn exponent_part(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)
        .void()
        .parse_next(input)
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
