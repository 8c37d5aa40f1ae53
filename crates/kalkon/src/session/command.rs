//! Session commands, entered with a leading `:`.

use crate::error::CalcError;
use crate::session::format::{IntegerWidth, Radix};

/// A recognized session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the output radix: `:dec`, `:hex`, `:bin`.
    Radix(Radix),
    /// Select the integer display width: `:int`, `:i8` .. `:u64`.
    Width(IntegerWidth),
    /// Clear history: `:clear`.
    Clear,
}

impl Command {
    /// Parse a command word.
    ///
    /// Returns `None` when the input does not start with `:` (and is
    /// therefore an expression). Inputs that do start with `:` but name no
    /// known command are an error, not an expression.
    pub fn parse(input: &str) -> Option<Result<Command, CalcError>> {
        let word = input.trim();
        if !word.starts_with(':') {
            return None;
        }
        let command = match word {
            ":dec" => Command::Radix(Radix::Decimal),
            ":hex" => Command::Radix(Radix::Hexadecimal),
            ":bin" => Command::Radix(Radix::Binary),
            ":int" => Command::Width(IntegerWidth::Int),
            ":i8" => Command::Width(IntegerWidth::I8),
            ":i16" => Command::Width(IntegerWidth::I16),
            ":i32" => Command::Width(IntegerWidth::I32),
            ":i64" => Command::Width(IntegerWidth::I64),
            ":u8" => Command::Width(IntegerWidth::U8),
            ":u16" => Command::Width(IntegerWidth::U16),
            ":u32" => Command::Width(IntegerWidth::U32),
            ":u64" => Command::Width(IntegerWidth::U64),
            ":clear" => Command::Clear,
            _ => {
                return Some(Err(CalcError::UnknownCommand {
                    command: word.to_string(),
                }));
            }
        };
        Some(Ok(command))
    }

    /// The canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Radix(Radix::Decimal) => ":dec",
            Command::Radix(Radix::Hexadecimal) => ":hex",
            Command::Radix(Radix::Binary) => ":bin",
            Command::Width(IntegerWidth::Int) => ":int",
            Command::Width(IntegerWidth::I8) => ":i8",
            Command::Width(IntegerWidth::I16) => ":i16",
            Command::Width(IntegerWidth::I32) => ":i32",
            Command::Width(IntegerWidth::I64) => ":i64",
            Command::Width(IntegerWidth::U8) => ":u8",
            Command::Width(IntegerWidth::U16) => ":u16",
            Command::Width(IntegerWidth::U32) => ":u32",
            Command::Width(IntegerWidth::U64) => ":u64",
            Command::Clear => ":clear",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
