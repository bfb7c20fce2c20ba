//! Terminal rendering of built reports and catalog listings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use indic_catalog::{CATALOG, DataType, codes};
use indic_model::{Aggregate, IndicatorReport};

/// Print the per-indicator summary with its demographic breakdown rows.
pub fn print_report(reports: &[IndicatorReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Category"),
        header_cell("Group"),
        header_cell("Value"),
        header_cell("Total"),
        header_cell("%"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for report in reports {
        for (index, aggregate) in report.groups.iter().enumerate() {
            let (name, category) = if index == 0 {
                (
                    indicator_cell(&report.display_name, report.indicator_key.is_some()),
                    Cell::new(report.category.clone()),
                )
            } else {
                (dim_cell(""), dim_cell(""))
            };
            table.add_row(vec![
                name,
                category,
                Cell::new(aggregate.name.clone()),
                Cell::new(aggregate.value),
                total_cell(aggregate),
                percentage_cell(aggregate),
            ]);
        }
    }
    println!("{table}");

    let unclassified: Vec<&IndicatorReport> = reports
        .iter()
        .filter(|report| report.indicator_key.is_none())
        .collect();
    if !unclassified.is_empty() {
        eprintln!("Unclassified indicators (counts only):");
        for report in unclassified {
            eprintln!("- {}", report.display_name);
        }
    }
}

/// Print the static indicator catalog.
pub fn print_indicators() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Display name"),
        header_cell("Category"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    for config in CATALOG {
        table.add_row(vec![
            Cell::new(config.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(config.display_name),
            Cell::new(config.category),
            data_type_cell(config.data_type),
        ]);
    }
    println!("{table}");
}

/// Print the code to detail-query lookup table.
pub fn print_codes() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Catalog key"),
        header_cell("Detail query"),
    ]);
    apply_table_style(&mut table);
    for (code, key, query) in codes::entries() {
        table.add_row(vec![
            Cell::new(code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(key),
            Cell::new(query),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn indicator_cell(name: &str, classified: bool) -> Cell {
    if classified {
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(name).fg(Color::Yellow)
    }
}

fn total_cell(aggregate: &Aggregate) -> Cell {
    match aggregate.total {
        Some(total) => Cell::new(total),
        // Null denominator is a data-quality signal, not a zero.
        None => dim_cell("-"),
    }
}

fn percentage_cell(aggregate: &Aggregate) -> Cell {
    match aggregate.percentage {
        Some(value) => Cell::new(format!("{value:.1}%")),
        None => dim_cell("-"),
    }
}

fn data_type_cell(data_type: DataType) -> Cell {
    match data_type {
        DataType::NumeratorDenominator => Cell::new("percentage"),
        DataType::Demographic => dim_cell("counts"),
        DataType::Comparison => Cell::new("comparison"),
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
