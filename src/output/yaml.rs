//! YAML output formatter

use crate::certificate::CertificateRecord;
use crate::utils::OutputError;
use std::io::Write;

/// Write every field of every record as a YAML sequence
pub fn write_yaml<W: Write>(records: &[CertificateRecord], writer: W) -> Result<(), OutputError> {
    serde_yaml::to_writer(writer, records)?;
    Ok(())
}
