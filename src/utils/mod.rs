//! Utility modules for certls
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{CertlsError, ConfigError, OutputError, ProbeError, Result};
pub use progress::{create_progress_bar, hidden_progress_bar};
