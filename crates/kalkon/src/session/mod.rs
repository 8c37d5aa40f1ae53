//! The stateful session layer: history, commands, and output formatting.

mod calculator;
mod command;
mod format;
mod history;

pub use calculator::{Calculator, Outcome};
pub use command::Command;
pub use format::{IntegerWidth, Radix, format_value};
pub use history::{History, HistoryEntry, RetentionPolicy};
