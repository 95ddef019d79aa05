//! Terminal and JSON rendering of lookup results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use routine_model::{Field, FilterOption, QueryStatus, Row};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Matched rows in query order, one column per field.
pub fn rows_table(rows: &[&Row]) -> Table {
    let mut table = Table::new();
    table.set_header(Field::ALL.iter().map(|field| header_cell(field.label())));
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(row.values().into_iter().map(Cell::new));
    }
    table
}

/// Option lists for the given fields, "All" first in each.
pub fn options_table(lists: &[(Field, Vec<FilterOption>)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Options")]);
    apply_table_style(&mut table);
    for (field, options) in lists {
        let cell = if options.len() > 1 {
            let labels: Vec<&str> = options.iter().map(FilterOption::label).collect();
            Cell::new(labels.join(", "))
        } else {
            dim_cell(&format!("{} (no values)", FilterOption::ALL_LABEL))
        };
        table.add_row(vec![Cell::new(field.label()), cell]);
    }
    table
}

/// Status, message and rows (keyed by header label) as one JSON document.
pub fn search_json(status: QueryStatus, rows: &[&Row]) -> serde_json::Result<String> {
    let document = serde_json::json!({
        "status": status,
        "message": status.message(),
        "rows": rows,
    });
    serde_json::to_string_pretty(&document)
}

/// Status line followed by the results, if any.
pub fn search_output(status: QueryStatus, rows: &[&Row]) -> String {
    let mut out = status.message();
    if status.count() > 0 {
        out.push('\n');
        out.push_str(&rows_table(rows).to_string());
    }
    out
}
