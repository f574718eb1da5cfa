//! Command implementations for certls

pub mod scan;

pub use scan::run_scan;
