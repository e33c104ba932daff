//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plurals::Category;

/// Categories of one locale over a run of quantities.
pub struct LocaleColumn {
    /// Resolved locale key, or the requested locale when it fell back.
    pub label: String,
    /// One category per quantity, in quantity order.
    pub categories: Vec<Category>,
}

/// Format quantities against per-locale categories as an ASCII table.
pub fn format_category_table(quantities: &[i64], columns: &[LocaleColumn]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["n".to_string()];
    header.extend(columns.iter().map(|column| column.label.clone()));
    table.set_header(header);

    for (row, quantity) in quantities.iter().enumerate() {
        let mut cells = vec![quantity.to_string()];
        cells.extend(
            columns
                .iter()
                .map(|column| column.categories[row].to_string()),
        );
        table.add_row(cells);
    }

    table
}
