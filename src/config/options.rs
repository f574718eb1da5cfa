//! Run options
//!
//! Toggles governing the TLS handshake and which certificate fields are
//! shown. Built once per run and passed by reference to the probe, the
//! scanner and the formatter.

use std::time::Duration;

/// Default per-host timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 1;

/// Default number of hosts probed at once
pub const DEFAULT_PARALLEL: usize = 5;

/// Immutable options for reading and showing certificates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    skip_tls_verify: bool,
    show_all: bool,
    show_ca: bool,
    show_issuer: bool,
    show_dns_names: bool,
    timeout_secs: u64,
    parallel: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_tls_verify: false,
            show_all: false,
            show_ca: false,
            show_issuer: false,
            show_dns_names: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            parallel: DEFAULT_PARALLEL,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable certificate chain verification. INSECURE.
    pub fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.skip_tls_verify = skip;
        self
    }

    /// Show CA certificates, issuer and DNS names
    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn with_show_ca(mut self, show_ca: bool) -> Self {
        self.show_ca = show_ca;
        self
    }

    pub fn with_show_issuer(mut self, show_issuer: bool) -> Self {
        self.show_issuer = show_issuer;
        self
    }

    pub fn with_show_dns_names(mut self, show_dns_names: bool) -> Self {
        self.show_dns_names = show_dns_names;
        self
    }

    /// Per-host deadline for connect and handshake together, 0 for none
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Maximum number of concurrent handshakes, never less than one
    pub fn with_parallel(mut self, parallel: usize) -> Self {
        self.parallel = parallel.max(1);
        self
    }

    pub fn skip_tls_verify(&self) -> bool {
        self.skip_tls_verify
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn parallel(&self) -> usize {
        self.parallel
    }

    /// Whether CA certificates from the chain are kept
    pub fn includes_ca(&self) -> bool {
        self.show_all || self.show_ca
    }

    /// Whether table and CSV output carry the issuer column
    pub fn shows_issuer(&self) -> bool {
        self.show_all || self.show_issuer
    }

    /// Whether table and CSV output carry the DNS names column
    pub fn shows_dns_names(&self) -> bool {
        self.show_all || self.show_dns_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_secure_and_minimal() {
        let options = Options::default();
        assert!(!options.skip_tls_verify());
        assert!(!options.includes_ca());
        assert!(!options.shows_issuer());
        assert!(!options.shows_dns_names());
        assert_eq!(options.timeout(), Duration::from_secs(1));
        assert_eq!(options.parallel(), DEFAULT_PARALLEL);
    }

    #[test]
    fn test_show_all_enables_every_field() {
        let options = Options::new().with_show_all(true);
        assert!(options.includes_ca());
        assert!(options.shows_issuer());
        assert!(options.shows_dns_names());
    }

    #[test]
    fn test_individual_toggles() {
        let options = Options::new().with_show_issuer(true);
        assert!(options.shows_issuer());
        assert!(!options.shows_dns_names());
        assert!(!options.includes_ca());

        let options = Options::new().with_show_ca(true);
        assert!(options.includes_ca());
        assert!(!options.shows_issuer());
    }

    #[test]
    fn test_parallel_is_clamped() {
        assert_eq!(Options::new().with_parallel(0).parallel(), 1);
        assert_eq!(Options::new().with_parallel(8).parallel(), 8);
    }
}
