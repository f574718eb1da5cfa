//! Field visibility for column-based output
//!
//! Table and CSV show host, common name and validity, plus issuer and DNS
//! names when the options ask for them. JSON and YAML do not go through
//! this projection and always carry every field.

use crate::certificate::CertificateRecord;
use crate::config::Options;
use chrono::{DateTime, Utc};

pub const TITLE_HOST: &str = "Host";
pub const TITLE_COMMON_NAME: &str = "Common Name";
pub const TITLE_CREATED: &str = "Created";
pub const TITLE_EXPIRE: &str = "Expire";
pub const TITLE_ISSUER: &str = "Issuer";
pub const TITLE_DNS_NAMES: &str = "DNS Names";

/// Column titles visible under `options`
pub fn column_titles(options: &Options) -> Vec<&'static str> {
    let mut titles = vec![TITLE_HOST, TITLE_COMMON_NAME, TITLE_CREATED, TITLE_EXPIRE];
    if options.shows_issuer() {
        titles.push(TITLE_ISSUER);
    }
    if options.shows_dns_names() {
        titles.push(TITLE_DNS_NAMES);
    }
    titles
}

/// Cells of `record` visible under `options`, aligned with [`column_titles`]
pub fn visible_fields(record: &CertificateRecord, options: &Options) -> Vec<String> {
    let mut fields = vec![
        record.connection_string.clone(),
        record.common_name.clone(),
        format_timestamp(&record.not_before),
        format_timestamp(&record.not_after),
    ];
    if options.shows_issuer() {
        fields.push(record.issuer_common_name.clone());
    }
    if options.shows_dns_names() {
        fields.push(record.dns_names.join(", "));
    }
    fields
}

pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> CertificateRecord {
        CertificateRecord {
            connection_string: "example.com:443".to_string(),
            common_name: "example.com".to_string(),
            not_before: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            not_after: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            issuer_common_name: "Example CA".to_string(),
            dns_names: vec!["example.com".to_string(), "www.example.com".to_string()],
        }
    }

    #[test]
    fn test_minimal_projection() {
        let options = Options::default();
        assert_eq!(
            column_titles(&options),
            vec!["Host", "Common Name", "Created", "Expire"]
        );
        assert_eq!(
            visible_fields(&record(), &options),
            vec![
                "example.com:443",
                "example.com",
                "2024-03-01 12:00:00 UTC",
                "2025-03-01 12:00:00 UTC",
            ]
        );
    }

    #[test]
    fn test_show_all_projection() {
        let options = Options::new().with_show_all(true);
        assert_eq!(column_titles(&options).len(), 6);
        let fields = visible_fields(&record(), &options);
        assert_eq!(fields[4], "Example CA");
        assert_eq!(fields[5], "example.com, www.example.com");
    }

    #[test]
    fn test_titles_and_fields_stay_aligned() {
        let options = Options::new().with_show_dns_names(true);
        let titles = column_titles(&options);
        let fields = visible_fields(&record(), &options);
        assert_eq!(titles.len(), fields.len());
        assert_eq!(titles[4], TITLE_DNS_NAMES);
        assert_eq!(fields[4], "example.com, www.example.com");
    }
}
