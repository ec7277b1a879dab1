//! GeoIP data structures.
//!
//! This module defines the loaded database handle and its metadata.

use maxminddb::Reader;
use serde::Serialize;

/// Metadata about a loaded GeoIP database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseMetadata {
    /// Path the database was loaded from
    pub source: String,
    /// Database edition, e.g. "GeoLite2-City"
    pub database_type: String,
    /// Database build date/version (extracted from database)
    pub version: String,
    /// Build time in seconds since the Unix epoch
    pub build_epoch: u64,
    /// 4 for IPv4-only databases, 6 for databases covering both families
    pub ip_version: u16,
    /// Number of nodes in the search tree
    pub node_count: u32,
}

/// A MaxMind database held fully in memory.
///
/// Read-only after construction; share it behind an `Arc`.
pub struct GeoIpDatabase {
    pub(crate) reader: Reader<Vec<u8>>,
    pub(crate) metadata: DatabaseMetadata,
}

impl GeoIpDatabase {
    /// Metadata captured when the database was opened.
    pub fn metadata(&self) -> &DatabaseMetadata {
        &self.metadata
    }
}

impl std::fmt::Debug for GeoIpDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoIpDatabase")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
