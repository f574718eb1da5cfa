//! Configuration module for certls
//!
//! Run options come from the command line; the host list comes from a JSON
//! or YAML file.

pub mod hosts;
pub mod options;

pub use hosts::{Host, HostFile};
pub use options::{Options, DEFAULT_PARALLEL, DEFAULT_TIMEOUT_SECS};
