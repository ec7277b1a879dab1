//! The lookup pipeline.
//!
//! A normalized host token goes through forward DNS resolution, then the City
//! lookup, then the ASN lookup. A DNS failure ends the query. The two database
//! lookups are independent: each result is kept whatever happened to the other.

mod types;

pub use types::{AsnRecord, GeoRecord, LookupOutcome};

use std::sync::Arc;

use crate::dns::{resolve_host_to_ip, NameResolver};
use crate::geoip::{AsnSource, GeoSource};

/// Resolution and enrichment services for answering queries.
///
/// Built once at startup and shared by every request; holds no per-query state.
#[derive(Clone)]
pub struct LookupService {
    resolver: Arc<dyn NameResolver>,
    geo: Arc<dyn GeoSource>,
    asn: Arc<dyn AsnSource>,
}

impl LookupService {
    pub fn new(
        resolver: Arc<dyn NameResolver>,
        geo: Arc<dyn GeoSource>,
        asn: Arc<dyn AsnSource>,
    ) -> Self {
        Self { resolver, geo, asn }
    }

    /// Looks up a normalized host token.
    ///
    /// An empty token yields [`LookupOutcome::Empty`] without touching any
    /// service.
    pub async fn lookup(&self, host: &str) -> LookupOutcome {
        if host.is_empty() {
            return LookupOutcome::Empty;
        }

        let address = match resolve_host_to_ip(host, self.resolver.as_ref()).await {
            Ok(address) => address,
            Err(error) => {
                return LookupOutcome::DnsFailed {
                    query: host.to_string(),
                    error,
                };
            }
        };

        let geo = self.geo.lookup_geo(address);
        if let Err(e) = &geo {
            log::warn!("{e} for {address} ({host})");
        }

        let asn = self.asn.lookup_asn(address);
        if let Err(e) = &asn {
            log::warn!("{e} for {address} ({host})");
        }

        log::debug!(
            "Lookup of {host} finished: address={address} geo_ok={} asn_ok={}",
            geo.is_ok(),
            asn.is_ok()
        );

        LookupOutcome::Resolved {
            query: host.to_string(),
            address,
            geo,
            asn,
        }
    }
}
