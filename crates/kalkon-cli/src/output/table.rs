//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use kalkon::HistoryEntry;

/// Format history entries as an ASCII table, oldest first.
pub fn format_history_table<'a>(entries: impl Iterator<Item = &'a HistoryEntry>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Expression", "Result"]);

    for entry in entries {
        table.add_row(vec![
            entry.index.to_string(),
            entry.expression.clone(),
            entry.display.clone(),
        ]);
    }

    table
}
