//! GeoIP lookup using MaxMind GeoLite2 databases.
//!
//! Two databases are used: GeoLite2-City for location data and GeoLite2-ASN for
//! network attribution. Both are loaded once at startup with [`open_database`]
//! and shared read-only by every request handler; lookups are in-memory reads
//! and need no locking.
//!
//! The pipeline only sees the [`GeoSource`] and [`AsnSource`] traits, so each
//! database is injected where it is needed rather than reached through global
//! state.

mod loader;
mod lookup;
mod metadata;
mod types;

// Re-export public API
pub use loader::open_database;
pub use lookup::{AsnSource, GeoSource};
pub use types::{DatabaseMetadata, GeoIpDatabase};
