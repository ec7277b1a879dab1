//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, database defaults, and lookup placeholders.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes before giving up on a name
pub const DNS_ATTEMPTS: usize = 2;

// Server defaults
/// Default listen host
pub const DEFAULT_HOST: &str = "localhost";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

// GeoIP databases
/// Default path of the GeoLite2 City database
pub const DEFAULT_CITY_DB_PATH: &str = "GeoLite2-City.mmdb";
/// Default path of the GeoLite2 ASN database
pub const DEFAULT_ASN_DB_PATH: &str = "GeoLite2-ASN.mmdb";
/// Substring expected in the `database_type` metadata of the City database
pub const CITY_DB_TYPE: &str = "City";
/// Substring expected in the `database_type` metadata of the ASN database
pub const ASN_DB_TYPE: &str = "ASN";

// Lookup results
/// Locale key used for every localized name (country, subdivision, city).
/// A name missing in this locale is reported as an empty string.
pub const NAME_LOCALE: &str = "zh-CN";
/// Province reported when the City record carries no subdivisions
pub const UNKNOWN_PROVINCE: &str = "unknown";
