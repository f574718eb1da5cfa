//! CSV output
//!
//! Semicolon separated, CRLF terminated, quoted only where a value needs it.

use crate::certificate::CertificateRecord;
use crate::config::Options;
use crate::output::fields::{column_titles, visible_fields};
use crate::utils::OutputError;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Write the visible columns of `records` as CSV
pub fn write_csv<W: Write>(
    records: &[CertificateRecord],
    options: &Options,
    writer: W,
) -> Result<(), OutputError> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(column_titles(options))?;
    for record in records {
        csv_writer.write_record(visible_fields(record, options))?;
    }
    csv_writer.flush()?;
    Ok(())
}
