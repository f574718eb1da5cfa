//! Table rendering using comfy-table

use crate::certificate::CertificateRecord;
use crate::config::Options;
use crate::output::fields::{column_titles, visible_fields};
use crate::utils::OutputError;
use comfy_table::presets::NOTHING;
use comfy_table::{ColumnConstraint, ContentArrangement, Table, Width};
use std::io::Write;

/// Minimum width of every column, padding included
const MIN_COLUMN_WIDTH: u16 = 20;

/// Spaces after each cell
const COLUMN_PADDING: u16 = 4;

/// Format records as borderless, left-aligned columns
pub fn format_table(records: &[CertificateRecord], options: &Options) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Disabled);
    table.set_header(column_titles(options));

    for record in records {
        table.add_row(visible_fields(record, options));
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_PADDING));
        column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(
            MIN_COLUMN_WIDTH,
        )));
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Write the table to `writer`
pub fn write_table<W: Write>(
    records: &[CertificateRecord],
    options: &Options,
    writer: &mut W,
) -> Result<(), OutputError> {
    writer.write_all(format_table(records, options).as_bytes())?;
    Ok(())
}
