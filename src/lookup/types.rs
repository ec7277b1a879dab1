//! Lookup data structures.

use serde::Serialize;
use std::net::IpAddr;

use crate::error_handling::LookupError;

/// Location of an address as reported by the City database.
///
/// Names are localized to a single locale; a name without that localization
/// is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoRecord {
    pub country: String,
    /// First subdivision, or `"unknown"` when the record has none
    pub province: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Network operator of an address as reported by the ASN database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AsnRecord {
    pub number: u32,
    pub organization: String,
}

/// Result of looking up one query.
///
/// The two enrichment results of [`LookupOutcome::Resolved`] are independent:
/// either may fail without affecting the other.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Nothing to look up (empty query and no usable client address)
    Empty,
    /// The query could not be resolved; no enrichment was attempted
    DnsFailed { query: String, error: LookupError },
    /// The query resolved to `address`
    Resolved {
        query: String,
        address: IpAddr,
        geo: Result<GeoRecord, LookupError>,
        asn: Result<AsnRecord, LookupError>,
    },
}

impl LookupOutcome {
    /// The normalized query this outcome was produced for.
    pub fn query(&self) -> &str {
        match self {
            LookupOutcome::Empty => "",
            LookupOutcome::DnsFailed { query, .. } | LookupOutcome::Resolved { query, .. } => {
                query
            }
        }
    }

    /// The resolved address, if resolution succeeded.
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            LookupOutcome::Resolved { address, .. } => Some(*address),
            _ => None,
        }
    }

    /// Every stage failure carried by this outcome, DNS first, then Geo, then ASN.
    pub fn errors(&self) -> Vec<&LookupError> {
        match self {
            LookupOutcome::Empty => Vec::new(),
            LookupOutcome::DnsFailed { error, .. } => vec![error],
            LookupOutcome::Resolved { geo, asn, .. } => {
                [geo.as_ref().err(), asn.as_ref().err()]
                    .into_iter()
                    .flatten()
                    .collect()
            }
        }
    }
}
