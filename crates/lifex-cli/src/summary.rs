use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lifex_transform::Encoding;

/// Result of one clean run, for the closing summary.
#[derive(Debug)]
pub struct CleanSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub country: String,
    pub encoding: Encoding,
    pub records_in: usize,
    pub records_out: usize,
}

pub fn print_summary(summary: &CleanSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Region"),
        header_cell("Encoding"),
        header_cell("Records in"),
        header_cell("Records out"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&summary.country)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.encoding),
        Cell::new(summary.records_in),
        Cell::new(summary.records_out),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
