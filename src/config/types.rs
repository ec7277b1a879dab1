//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ASN_DB_PATH, DEFAULT_CITY_DB_PATH, DEFAULT_HOST, DEFAULT_PORT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server configuration.
///
/// Parsed from the command line by the binary, but plain enough to be built
/// programmatically by library users and tests.
///
/// # Examples
///
/// ```no_run
/// use ip_locator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     port: 9000,
///     city_db: PathBuf::from("/var/lib/geoip/GeoLite2-City.mmdb"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_locator",
    version,
    about = "Look up the location and network operator of an IP address, hostname or URL"
)]
pub struct Config {
    /// Listen address
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Listen port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path of the GeoLite2-City database file
    #[arg(long = "citydb", default_value = DEFAULT_CITY_DB_PATH)]
    pub city_db: PathBuf,

    /// Path of the GeoLite2-ASN database file
    #[arg(long = "asndb", default_value = DEFAULT_ASN_DB_PATH)]
    pub asn_db: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Address the HTTP listener binds to (`host:port`).
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            city_db: PathBuf::from(DEFAULT_CITY_DB_PATH),
            asn_db: PathBuf::from(DEFAULT_ASN_DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
