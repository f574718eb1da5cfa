//! JSON output formatter

use crate::certificate::CertificateRecord;
use crate::utils::OutputError;
use std::io::Write;

/// Write every field of every record as a pretty-printed JSON array
pub fn write_json<W: Write>(
    records: &[CertificateRecord],
    mut writer: W,
) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    Ok(())
}
