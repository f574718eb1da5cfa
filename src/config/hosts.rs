//! Host list loading
//!
//! A host file is JSON or YAML, picked by extension:
//!
//! ```yaml
//! hosts:
//!   - address: www.example.com
//!     port: 443
//!   - address: mail.example.com
//!     port: "993"
//! ```

use crate::utils::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// A TLS endpoint to probe
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Host {
    pub address: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
}

impl Host {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

/// Canonical `address:port`, used as the connection string of every record
impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// Ports may be written as numbers or as numeric strings
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u16),
        Text(String),
    }

    match RawPort::deserialize(deserializer)? {
        RawPort::Number(port) => Ok(port),
        RawPort::Text(text) => text
            .trim()
            .parse::<u16>()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {:?}", text))),
    }
}

/// Host file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostFile {
    #[serde(default)]
    pub hosts: Vec<Host>,
}

impl HostFile {
    /// Load a host file, selecting the parser by file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: display.clone(),
            message: e.to_string(),
        })?;

        match extension.as_deref() {
            Some("json") => Self::from_json(&content).map_err(|message| {
                ConfigError::ParseError {
                    path: display,
                    message,
                }
            }),
            Some("yaml") => Self::from_yaml(&content).map_err(|message| {
                ConfigError::ParseError {
                    path: display,
                    message,
                }
            }),
            _ => Err(ConfigError::UnsupportedExtension { path: display }),
        }
    }

    fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
