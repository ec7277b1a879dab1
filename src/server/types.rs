//! Web server data structures.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::error_handling::{LookupError, LookupStats};
use crate::geoip::DatabaseMetadata;
use crate::lookup::{AsnRecord, GeoRecord, LookupOutcome, LookupService};

/// Shared state for the web server
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
    /// Metadata of the loaded databases, City first
    pub databases: Arc<Vec<DatabaseMetadata>>,
    pub stats: Arc<LookupStats>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(lookup: LookupService, databases: Vec<DatabaseMetadata>) -> Self {
        Self {
            lookup: Arc::new(lookup),
            databases: Arc::new(databases),
            stats: Arc::new(LookupStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Query string of `/` and `/api/lookup`
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub ip: Option<String>,
}

/// JSON response for `/api/lookup`
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<AsnRecord>,
    pub errors: Vec<LookupError>,
}

impl From<&LookupOutcome> for LookupResponse {
    fn from(outcome: &LookupOutcome) -> Self {
        let (geo, asn) = match outcome {
            LookupOutcome::Resolved { geo, asn, .. } => {
                (geo.clone().ok(), asn.clone().ok())
            }
            _ => (None, None),
        };

        LookupResponse {
            query: outcome.query().to_string(),
            address: outcome.address(),
            geo,
            asn,
            errors: outcome.errors().into_iter().cloned().collect(),
        }
    }
}

/// JSON response for `/status`
#[derive(Serialize)]
pub struct StatusResponse {
    pub databases: Vec<DatabaseMetadata>,
    pub uptime_seconds: f64,
    pub lookups: LookupCounts,
}

#[derive(Serialize)]
pub struct LookupCounts {
    pub total: usize,
    pub errors: ErrorCounts,
}

#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub dns: usize,
    pub geo: usize,
    pub asn: usize,
}
