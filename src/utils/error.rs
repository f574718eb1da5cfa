//! Custom error types for certls
//!
//! Errors are split by stage: loading configuration, probing a single host,
//! and writing output. Probe errors never reach the top level; the scanner
//! logs them per host and carries on.

use thiserror::Error;

/// Top-level error type for the certls application
#[derive(Error, Debug)]
pub enum CertlsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host file and run configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Host file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read host file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Unsupported host file format: {path} (expected .json or .yaml)")]
    UnsupportedExtension { path: String },

    #[error("Failed to parse host file {path}: {message}")]
    ParseError { path: String, message: String },
}

/// Errors retrieving the certificate chain from a single host
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to resolve {host}: {message}")]
    Resolve { host: String, message: String },

    #[error("Connection refused by {host}")]
    ConnectionRefused { host: String },

    #[error("Connection to {host} failed: {message}")]
    Connect { host: String, message: String },

    #[error("Timed out after {seconds}s during {stage} with {host}")]
    Timeout {
        host: String,
        stage: &'static str,
        seconds: u64,
    },

    #[error("Invalid server name: {name}")]
    InvalidServerName { name: String },

    #[error("TLS handshake with {host} failed: {message}")]
    Handshake { host: String, message: String },

    #[error("No certificates presented by {host}")]
    NoCertificates { host: String },

    #[error("Failed to parse certificate: {message}")]
    Certificate { message: String },
}

/// Errors encoding or writing the rendered records
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias using CertlsError
pub type Result<T> = std::result::Result<T, CertlsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_wraps_into_top_level() {
        let err: CertlsError = ConfigError::UnsupportedExtension {
            path: "hosts.txt".to_string(),
        }
        .into();
        assert!(matches!(err, CertlsError::Config(_)));
        assert!(err.to_string().contains("hosts.txt"));
    }

    #[test]
    fn test_timeout_message_names_stage() {
        let err = ProbeError::Timeout {
            host: "example.com:443".to_string(),
            stage: "TLS handshake",
            seconds: 3,
        };
        assert_eq!(
            err.to_string(),
            "Timed out after 3s during TLS handshake with example.com:443"
        );
    }
}
