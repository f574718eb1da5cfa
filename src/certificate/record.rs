//! Certificate record
//!
//! The flat, format-agnostic view of one certificate retained from a host's
//! chain. JSON and YAML output serialise every field with the keys below.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One certificate as reported for a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRecord {
    /// `address:port` of the host that presented the certificate
    #[serde(rename = "connectionstring")]
    pub connection_string: String,
    #[serde(rename = "commonname")]
    pub common_name: String,
    #[serde(rename = "created")]
    pub not_before: DateTime<Utc>,
    #[serde(rename = "expire")]
    pub not_after: DateTime<Utc>,
    #[serde(rename = "issuer")]
    pub issuer_common_name: String,
    /// Subject alternative DNS names in the order the certificate lists them
    #[serde(rename = "dnsnames")]
    pub dns_names: Vec<String>,
}
