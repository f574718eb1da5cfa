//! Host list scanner
//!
//! Drives the TLS probe over every host with bounded concurrency. Results
//! come back in host order whatever order the handshakes finish in, and a
//! failing host only costs its own records.

use crate::certificate::CertificateRecord;
use crate::checks::TlsProbe;
use crate::config::{Host, Options};
use crate::utils::ProbeError;
use futures::stream::{self, StreamExt};

/// A host that contributed no records, and why
#[derive(Debug)]
pub struct HostFailure {
    pub host: Host,
    pub error: ProbeError,
}

/// Aggregated outcome of a scan
#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<CertificateRecord>,
    pub failures: Vec<HostFailure>,
}

impl ScanReport {
    pub fn failed_hosts(&self) -> usize {
        self.failures.len()
    }
}

/// Scans a list of hosts for certificates
pub struct Scanner {
    probe: TlsProbe,
}

impl Scanner {
    pub fn new(options: Options) -> Self {
        Self {
            probe: TlsProbe::new(options),
        }
    }

    pub fn options(&self) -> &Options {
        self.probe.options()
    }

    /// Probe every host and aggregate the records in host order
    pub async fn scan(&self, hosts: &[Host]) -> ScanReport {
        self.scan_with_progress(hosts, || {}).await
    }

    /// Like [`Scanner::scan`], calling `on_host_done` once per finished host
    pub async fn scan_with_progress<F>(&self, hosts: &[Host], mut on_host_done: F) -> ScanReport
    where
        F: FnMut(),
    {
        let parallel = self.options().parallel();
        tracing::debug!(hosts = hosts.len(), parallel, "starting scan");

        let results: Vec<(&Host, Result<Vec<CertificateRecord>, ProbeError>)> =
            stream::iter(hosts)
                .map(|host| async move { (host, self.probe.connect(host).await) })
                .buffered(parallel)
                .inspect(|_| on_host_done())
                .collect()
                .await;

        let mut report = ScanReport::default();
        for (host, result) in results {
            match result {
                Ok(records) => {
                    tracing::debug!(host = %host, records = records.len(), "host scanned");
                    report.records.extend(records);
                }
                Err(error) => {
                    tracing::error!(host = %host, "{}", error);
                    report.failures.push(HostFailure {
                        host: host.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            hosts = hosts.len(),
            records = report.records.len(),
            failed = report.failed_hosts(),
            "scan complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_host_list() {
        let scanner = Scanner::new(Options::default());
        let report = scanner.scan(&[]).await;
        assert!(report.records.is_empty());
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_collected_in_order() {
        let mut hosts = Vec::new();
        for _ in 0..3 {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            hosts.push(Host::new("127.0.0.1", listener.local_addr().unwrap().port()));
        }

        let scanner = Scanner::new(Options::new().with_timeout_secs(2).with_parallel(2));
        let mut done = 0;
        let report = scanner.scan_with_progress(&hosts, || done += 1).await;

        assert_eq!(done, 3);
        assert!(report.records.is_empty());
        let failed: Vec<&Host> = report.failures.iter().map(|f| &f.host).collect();
        assert_eq!(failed, hosts.iter().collect::<Vec<_>>());
    }
}
