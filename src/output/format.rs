//! Output format selection

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns (default)
    Table,
    /// Semicolon separated values with CRLF line endings
    Csv,
    /// JSON array with every field
    Json,
    /// YAML sequence with every field
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
