//! Metadata extraction for GeoIP databases.

use maxminddb::Reader;

use super::types::DatabaseMetadata;

/// Extracts metadata from a GeoIP database
pub(crate) fn extract_metadata<T: AsRef<[u8]>>(reader: &Reader<T>, source: &str) -> DatabaseMetadata {
    let meta = &reader.metadata;

    DatabaseMetadata {
        source: source.to_string(),
        database_type: meta.database_type.clone(),
        version: format!("build_{}", meta.build_epoch),
        build_epoch: meta.build_epoch,
        ip_version: meta.ip_version,
        node_count: meta.node_count,
    }
}

/// Checks that a database is the expected edition.
///
/// MaxMind editions carry their kind in `database_type` ("GeoLite2-City",
/// "GeoIP2-City", "GeoLite2-ASN", ...), so a substring match is enough.
pub(crate) fn is_expected_type(metadata: &DatabaseMetadata, expected: &str) -> bool {
    metadata.database_type.contains(expected)
}
