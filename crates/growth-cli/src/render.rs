//! Terminal tables for reference data.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use growth_model::Sex;
use growth_standards::ReferenceTable;

use crate::report::InfoReport;

const SD_HEADERS: [&str; 7] = ["-3 SD", "-2 SD", "-1 SD", "Median", "+1 SD", "+2 SD", "+3 SD"];

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

fn number_cell(value: impl ToString) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Reference rows, optionally restricted to one sex and one age.
pub fn reference_table(table: &ReferenceTable, sex: Option<Sex>, age: Option<u8>) -> Table {
    let mut out = Table::new();
    let mut header = vec![header_cell("Sex"), header_cell("Age (months)")];
    header.extend(SD_HEADERS.iter().map(|label| header_cell(label)));
    out.set_header(header);
    apply_table_style(&mut out);

    let sexes: Vec<Sex> = match sex {
        Some(sex) => vec![sex],
        None => Sex::all().to_vec(),
    };
    for sex in sexes {
        for (key, row) in table.rows(sex) {
            if age.is_some_and(|age| age != key.age) {
                continue;
            }
            let mut cells = vec![Cell::new(sex), number_cell(key.age)];
            cells.extend(row.weights().iter().map(|weight| number_cell(format!("{weight:.1}"))));
            out.add_row(cells);
        }
    }
    out
}

pub fn info_table(report: &InfoReport) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Sex"),
        header_cell("Rows"),
        header_cell("Ages (months)"),
    ]);
    apply_table_style(&mut out);
    for coverage in &report.coverage {
        let ages = match (coverage.min_age, coverage.max_age) {
            (Some(min), Some(max)) => format!("{min}-{max}"),
            _ => "-".to_string(),
        };
        out.add_row(vec![
            Cell::new(coverage.sex),
            number_cell(coverage.rows),
            Cell::new(ages),
        ]);
    }
    out
}
