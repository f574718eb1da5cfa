//! Certificate chain parsing and projection into records

use crate::certificate::record::CertificateRecord;
use crate::config::{Host, Options};
use crate::utils::ProbeError;
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// The fields of one chain entry that records are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCertificate {
    pub common_name: String,
    pub issuer_common_name: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub dns_names: Vec<String>,
    pub is_ca: bool,
}

impl ParsedCertificate {
    pub fn into_record(self, connection_string: String) -> CertificateRecord {
        CertificateRecord {
            connection_string,
            common_name: self.common_name,
            not_before: self.not_before,
            not_after: self.not_after,
            issuer_common_name: self.issuer_common_name,
            dns_names: self.dns_names,
        }
    }
}

/// Parse a single certificate from DER bytes
pub fn parse_certificate(der: &[u8]) -> Result<ParsedCertificate, ProbeError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| ProbeError::Certificate {
        message: e.to_string(),
    })?;

    Ok(ParsedCertificate {
        common_name: common_name(cert.subject()),
        issuer_common_name: common_name(cert.issuer()),
        not_before: asn1_time_to_datetime(cert.validity().not_before)?,
        not_after: asn1_time_to_datetime(cert.validity().not_after)?,
        dns_names: extract_dns_names(&cert),
        is_ca: cert.is_ca(),
    })
}

/// Turn a presented chain into records for `host`
///
/// Chain order is preserved. CA entries are dropped unless the options ask
/// for them. A single unparsable entry fails the whole chain.
pub fn records_from_chain<C: AsRef<[u8]>>(
    chain: &[C],
    host: &Host,
    options: &Options,
) -> Result<Vec<CertificateRecord>, ProbeError> {
    let connection_string = host.to_string();
    let mut records = Vec::with_capacity(chain.len());

    for der in chain {
        let parsed = parse_certificate(der.as_ref())?;
        if parsed.is_ca && !options.includes_ca() {
            tracing::debug!(host = %host, cn = %parsed.common_name, "skipping CA certificate");
            continue;
        }
        records.push(parsed.into_record(connection_string.clone()));
    }

    Ok(records)
}

/// First common name attribute, or empty when absent
fn common_name(name: &X509Name) -> String {
    name.iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(|cn| cn.to_string())
        .unwrap_or_default()
}

fn extract_dns_names(cert: &X509Certificate) -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(Some(san_ext)) = cert.subject_alternative_name() {
        for name in &san_ext.value.general_names {
            if let GeneralName::DNSName(dns) = name {
                names.push(dns.to_string());
            }
        }
    }

    names
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, ProbeError> {
    let timestamp = time.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| ProbeError::Certificate {
            message: format!("invalid timestamp {}", timestamp),
        })
}
