//! Certificate handling module
//!
//! Parses the DER chain a server presents and projects it into flat
//! records.

pub mod chain;
pub mod record;

pub use chain::{parse_certificate, records_from_chain, ParsedCertificate};
pub use record::CertificateRecord;
