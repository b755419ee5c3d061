use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use backlog_cli::types::ExportResult;

pub fn print_summary(result: &ExportResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: (dry run, not written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source Column"), header_cell("Report Column")]);
    apply_table_style(&mut table);
    for (source, target) in &result.columns {
        let target_cell = if source == target {
            Cell::new(target)
        } else {
            Cell::new(target).fg(Color::Green)
        };
        table.add_row(vec![Cell::new(source), target_cell]);
    }
    println!("{table}");
    println!("Rows: {}", result.rows);
    if !result.dropped.is_empty() {
        println!("Dropped columns: {}", result.dropped.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
