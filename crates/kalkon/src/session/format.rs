//! Result rendering: radix and integer-width display modes.
//!
//! The session formats integer results in the selected radix after masking
//! and reinterpreting them at the selected width (two's-complement wrap).
//! Floats always render in decimal; radix and width apply to integers only.

use crate::types::Value;

/// Output radix for integer results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    Hexadecimal,
    Binary,
}

/// Integer display width.
///
/// `Int` is the native untruncated width. The fixed widths reinterpret the
/// result's low bits, so `256` displayed at `U8` is `0` and `-1` at `U8`
/// is `255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerWidth {
    #[default]
    Int,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntegerWidth {
    /// Bit width, or `None` for the native width.
    pub fn bits(&self) -> Option<u32> {
        match self {
            IntegerWidth::Int => None,
            IntegerWidth::I8 | IntegerWidth::U8 => Some(8),
            IntegerWidth::I16 | IntegerWidth::U16 => Some(16),
            IntegerWidth::I32 | IntegerWidth::U32 => Some(32),
            IntegerWidth::I64 | IntegerWidth::U64 => Some(64),
        }
    }

    /// Whether the width is interpreted as signed.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntegerWidth::Int
                | IntegerWidth::I8
                | IntegerWidth::I16
                | IntegerWidth::I32
                | IntegerWidth::I64
        )
    }
}

/// Render a value under the given radix and width.
pub fn format_value(value: Value, radix: Radix, width: IntegerWidth) -> String {
    match value {
        Value::Int(n) => format_int(n, radix, width),
        Value::Float(x) => format_float(x),
    }
}

fn format_int(n: i64, radix: Radix, width: IntegerWidth) -> String {
    let Some(bits) = width.bits() else {
        // Native width: sign-prefixed in every radix
        return match radix {
            Radix::Decimal => n.to_string(),
            Radix::Hexadecimal if n < 0 => format!("-0x{:x}", n.unsigned_abs()),
            Radix::Hexadecimal => format!("0x{n:x}"),
            Radix::Binary if n < 0 => format!("-0b{:b}", n.unsigned_abs()),
            Radix::Binary => format!("0b{n:b}"),
        };
    };

    let mask = if bits == 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    };
    let truncated = (n as u64) & mask;

    match radix {
        Radix::Decimal => {
            if width.is_signed() {
                // Sign-extend the masked bits back to i64
                let shift = 64 - bits;
                (((truncated << shift) as i64) >> shift).to_string()
            } else {
                truncated.to_string()
            }
        }
        Radix::Hexadecimal => format!("0x{truncated:0width$x}", width = (bits / 4) as usize),
        Radix::Binary => format!("0b{truncated:0width$b}", width = bits as usize),
    }
}

/// Format a float: integral values without a fraction, everything else with
/// up to ten fractional digits and trailing zeros trimmed, falling back to
/// scientific notation outside the comfortable range.
fn format_float(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e15 {
        return format!("{}", x as i64);
    }
    if x.abs() >= 1e15 || x.abs() < 1e-10 {
        return format!("{x:e}");
    }
    let formatted = format!("{x:.10}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
