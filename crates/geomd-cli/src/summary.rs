use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use geomd_model::SkipRecord;

use crate::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    println!("Folder: {}", result.folder_name);
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filename"),
        header_cell("Conformant"),
        header_cell("Missing mandatory fields"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_missing = 0usize;
    for (filename, outcome) in &result.results {
        total_missing += outcome.missing_count();
        table.add_row(vec![
            Cell::new(filename),
            verdict_cell(outcome.conformant),
            missing_cell(&outcome.missing_mandatory),
            count_cell(outcome.missing_count(), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{}/{}", result.conformant(), result.processed()))
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_missing, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_skips(&result.skipped);
}

fn print_skips(skips: &[SkipRecord]) {
    if skips.is_empty() {
        return;
    }
    println!();
    println!("Skipped:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Filename"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for skip in skips {
        table.add_row(vec![
            Cell::new(&skip.filename),
            Cell::new(&skip.reason).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn verdict_cell(conformant: bool) -> Cell {
    if conformant {
        Cell::new("Yes")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("No").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn missing_cell(missing: &[String]) -> Cell {
    if missing.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(missing.join(", "))
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
