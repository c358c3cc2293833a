use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use atlas_validate::ValidationReport;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    println!("Canonical CSV: {}", result.clean_csv.display());
    println!("Quality profile: {}", result.profile.display());
    if let Some(path) = &result.report {
        println!("Validation report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Source file"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for source in &result.sources {
        let file = source
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| source.path.display().to_string());
        table.add_row(vec![
            Cell::new(source.metric.column_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file),
            Cell::new(source.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("MERGED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("clean_data"),
        Cell::new(result.merged_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    match &result.validation {
        Some(report) => print_checks(report),
        None => println!("Validation skipped."),
    }
}

pub fn print_checks(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Kind"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for outcome in &report.outcomes {
        let kind = if outcome.check.is_hard() {
            Cell::new("hard")
        } else {
            dim_cell("soft")
        };
        table.add_row(vec![
            Cell::new(outcome.check.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            kind,
            status_cell(outcome.passed),
            Cell::new(outcome.detail.clone()),
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

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
