//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the process-wide resources:
//! - Logger
//! - DNS resolver
//!
//! The GeoIP databases are opened by [`crate::geoip::open_database`].
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
