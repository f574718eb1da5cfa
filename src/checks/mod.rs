//! Check modules for certls
//!
//! This module contains the TLS probe that reads certificate chains.

pub mod tls;

pub use tls::TlsProbe;
