//! GeoIP database loading from files.

use anyhow::{Context, Result};
use maxminddb::Reader;
use std::path::{Path, PathBuf};

use super::metadata::{extract_metadata, is_expected_type};
use super::types::GeoIpDatabase;

/// Loads a GeoIP database from a local file path.
///
/// The whole file is read into memory, so lookups never touch the disk
/// afterwards. `expected_type` ("City" or "ASN") is compared with the
/// database's own `database_type`; a mismatch is logged but not fatal, since
/// commercial and custom editions use other names.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid MaxMind DB.
pub async fn open_database(path: &Path, expected_type: &str) -> Result<GeoIpDatabase> {
    let path = clean_path(path);
    let display = path.display().to_string();
    log::info!("Loading GeoIP database from: {}", display);

    let db_bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read GeoIP database from {}", display))?;

    let reader = Reader::from_source(db_bytes)
        .with_context(|| format!("Failed to parse GeoIP database from {}", display))?;

    let metadata = extract_metadata(&reader, &display);
    if !is_expected_type(&metadata, expected_type) {
        log::warn!(
            "{} is a {} database, expected a {} database",
            display,
            metadata.database_type,
            expected_type
        );
    }

    log::info!(
        "Loaded {} ({}, {} nodes)",
        metadata.database_type,
        metadata.version,
        metadata.node_count
    );

    Ok(GeoIpDatabase { reader, metadata })
}

/// Normalizes redundant separators and `.` segments of a path.
fn clean_path(path: &Path) -> PathBuf {
    path.components().collect()
}
