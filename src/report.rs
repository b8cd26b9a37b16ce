//! Fixed-width table rendering for the collected statistics.

use crate::pipeline::StatsTable;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ColumnConstraint, Table, Width};

/// Column headings of the report
pub const HEADER: [&str; 4] = ["Package name", "daily", "weekly", "monthly"];

/// Extra width added to the longest cell of every column
const COLUMN_SLACK: usize = 5;

/// Alignment of each column: names on the left, counts on the right
const ALIGNMENTS: [CellAlignment; 4] = [
    CellAlignment::Left,
    CellAlignment::Right,
    CellAlignment::Right,
    CellAlignment::Right,
];

/// Turns the stats into rows of cells, header first
pub fn to_rows(stats: &StatsTable) -> Vec<[String; 4]> {
    let mut rows = Vec::with_capacity(stats.len() + 1);
    rows.push(HEADER.map(String::from));
    for (name, pkg) in stats.iter() {
        rows.push([
            name.to_string(),
            pkg.daily_downloads.clone(),
            pkg.weekly_downloads.clone(),
            pkg.monthly_downloads.clone(),
        ]);
    }
    rows
}

/// Width of a column holding `longest` characters at most
pub fn column_width(longest: usize) -> usize {
    longest + COLUMN_SLACK
}

/// Computes the width of every column from its longest cell, header included
pub fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = [0; 4];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(column_width(cell.chars().count()));
        }
    }
    widths
}

/// Renders the stats as a bordered table ready to print
pub fn render(stats: &StatsTable) -> String {
    let rows = to_rows(stats);
    let widths = column_widths(&rows);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADER);
    for row in rows.iter().skip(1) {
        table.add_row(row.iter());
    }

    for (index, (width, alignment)) in widths.iter().zip(ALIGNMENTS).enumerate() {
        if let Some(column) = table.column_mut(index) {
            let width = u16::try_from(*width).unwrap_or(u16::MAX);
            column.set_cell_alignment(alignment);
            column.set_constraint(ColumnConstraint::Absolute(Width::Fixed(width)));
        }
    }

    table.to_string()
}
