//! certls library
//!
//! Reads the TLS certificates served by a list of hosts and reports them:
//! - Host lists loaded from JSON or YAML
//! - TLS handshake with optional (insecure) verification bypass
//! - CA filtering over the presented chain
//! - Table, CSV, JSON and YAML output
//!
//! # Usage
//!
//! ```rust,ignore
//! use certls::config::{Host, Options};
//! use certls::output::{render, OutputFormat};
//! use certls::scanner::Scanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = Options::new().with_timeout_secs(3);
//!     let scanner = Scanner::new(options.clone());
//!     let report = scanner.scan(&[Host::new("example.com", 443)]).await;
//!     render(&report.records, &options, OutputFormat::Table, &mut std::io::stdout()).unwrap();
//! }
//! ```

pub mod certificate;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use certificate::CertificateRecord;
pub use cli::Cli;
pub use config::{Host, HostFile, Options};
pub use output::OutputFormat;
pub use scanner::{ScanReport, Scanner};
pub use utils::{CertlsError, Result};
