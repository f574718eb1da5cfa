//! Output formatting module
//!
//! Renders a record set in one of four formats:
//! - Table and CSV, limited to the visible columns
//! - JSON and YAML, always with every field

pub mod csv;
pub mod fields;
pub mod format;
pub mod json;
pub mod table;
pub mod yaml;

pub use self::csv::write_csv;
pub use fields::{column_titles, visible_fields};
pub use format::OutputFormat;
pub use json::write_json;
pub use table::{format_table, write_table};
pub use yaml::write_yaml;

use crate::certificate::CertificateRecord;
use crate::config::Options;
use crate::utils::OutputError;
use std::io::Write;

/// Render `records` in `format` to `writer` and flush it
pub fn render<W: Write>(
    records: &[CertificateRecord],
    options: &Options,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Table => write_table(records, options, writer)?,
        OutputFormat::Csv => write_csv(records, options, &mut *writer)?,
        OutputFormat::Json => write_json(records, &mut *writer)?,
        OutputFormat::Yaml => write_yaml(records, &mut *writer)?,
    }
    writer.flush()?;
    Ok(())
}
