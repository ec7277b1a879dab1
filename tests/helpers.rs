// Shared test helpers: in-memory stand-ins for the resolver and both databases.
//
// Integration tests never touch the network or real GeoLite2 files; they build a
// `LookupService` from these doubles instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ip_locator::dns::NameResolver;
use ip_locator::geoip::{AsnSource, DatabaseMetadata, GeoSource};
use ip_locator::{AppState, AsnRecord, GeoRecord, LookupError, LookupService};

/// Resolver with a fixed host table. IP literals resolve to themselves.
#[derive(Default)]
pub struct FakeResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
    pub calls: AtomicUsize,
}

impl FakeResolver {
    #[allow(dead_code)] // Used by other test files
    pub fn with_host(mut self, host: &str, addrs: &[&str]) -> Self {
        let addrs = addrs
            .iter()
            .map(|a| a.parse().expect("test address should parse"))
            .collect();
        self.hosts.insert(host.to_string(), addrs);
        self
    }
}

#[async_trait]
impl NameResolver for FakeResolver {
    async fn lookup_addrs(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }
        self.hosts
            .get(host)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no record found for {host}"))
    }
}

/// City and ASN data keyed by address.
#[derive(Default)]
pub struct FakeDatabase {
    geo: HashMap<IpAddr, GeoRecord>,
    asn: HashMap<IpAddr, AsnRecord>,
    pub calls: AtomicUsize,
}

impl FakeDatabase {
    #[allow(dead_code)] // Used by other test files
    pub fn with_geo(mut self, ip: &str, country: &str, province: &str, city: &str) -> Self {
        self.geo.insert(
            ip.parse().expect("test address should parse"),
            GeoRecord {
                country: country.to_string(),
                province: province.to_string(),
                city: city.to_string(),
                latitude: 39.9042,
                longitude: 116.4074,
            },
        );
        self
    }

    #[allow(dead_code)] // Used by other test files
    pub fn with_asn(mut self, ip: &str, number: u32, organization: &str) -> Self {
        self.asn.insert(
            ip.parse().expect("test address should parse"),
            AsnRecord {
                number,
                organization: organization.to_string(),
            },
        );
        self
    }
}

impl GeoSource for FakeDatabase {
    fn lookup_geo(&self, ip: IpAddr) -> Result<GeoRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.geo.get(&ip).cloned().ok_or(LookupError::Geo)
    }
}

impl AsnSource for FakeDatabase {
    fn lookup_asn(&self, ip: IpAddr) -> Result<AsnRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.asn.get(&ip).cloned().ok_or(LookupError::Asn)
    }
}

/// Builds a service over shared doubles, returning the doubles for inspection.
#[allow(dead_code)] // Used by other test files
pub fn build_service(
    resolver: FakeResolver,
    database: FakeDatabase,
) -> (LookupService, Arc<FakeResolver>, Arc<FakeDatabase>) {
    let resolver = Arc::new(resolver);
    let database = Arc::new(database);
    let service = LookupService::new(resolver.clone(), database.clone(), database.clone());
    (service, resolver, database)
}

/// Web server state over the doubles, with metadata for two databases.
#[allow(dead_code)] // Used by other test files
pub fn build_state(resolver: FakeResolver, database: FakeDatabase) -> AppState {
    let (service, _, _) = build_service(resolver, database);
    AppState::new(
        service,
        vec![
            metadata("GeoLite2-City.mmdb", "GeoLite2-City"),
            metadata("GeoLite2-ASN.mmdb", "GeoLite2-ASN"),
        ],
    )
}

fn metadata(source: &str, database_type: &str) -> DatabaseMetadata {
    DatabaseMetadata {
        source: source.to_string(),
        database_type: database_type.to_string(),
        version: "2024-05-21".to_string(),
        build_epoch: 1_716_249_600,
        ip_version: 6,
        node_count: 1024,
    }
}

/// The usual fixture: one dual-listed host and data for its first address.
#[allow(dead_code)] // Used by other test files
pub fn standard_fixture() -> (FakeResolver, FakeDatabase) {
    let resolver = FakeResolver::default()
        .with_host("www.example.cn", &["203.0.113.10", "203.0.113.11"])
        .with_host("nodata.example", &["198.51.100.77"]);
    let database = FakeDatabase::default()
        .with_geo("203.0.113.10", "中国", "北京", "北京")
        .with_asn("203.0.113.10", 4808, "China Unicom Beijing Province Network")
        .with_geo("192.0.2.1", "日本", "unknown", "")
        .with_asn("198.51.100.1", 64500, "Example Transit");
    (resolver, database)
}
