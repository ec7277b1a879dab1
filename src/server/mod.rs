//! HTTP server for the lookup page.
//!
//! Provides four endpoints:
//! - `/` - HTML lookup page (`?ip=` to query, client address otherwise)
//! - `/api/lookup` - the same lookup as JSON
//! - `/status` - JSON status with database metadata and lookup counters
//! - `/metrics` - Prometheus-compatible metrics
//!
//! The server runs until its cancellation token fires, then finishes the
//! requests in flight.

mod handlers;
mod types;

use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;

use handlers::{api_lookup_handler, metrics_handler, page_handler, status_handler};
pub use types::{AppState, ErrorCounts, LookupCounts, LookupParams, LookupResponse, StatusResponse};

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/lookup", get(api_lookup_handler))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Binds `addr` and serves until `cancel` is triggered.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_server(
    addr: &str,
    state: AppState,
    cancel: CancellationToken,
) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    let local = listener.local_addr().context("Failed to read bound address")?;
    log::info!("Server listening on http://{}/", local);
    log::info!("  - Lookup: http://{}/?ip=<address or domain>", local);
    log::info!("  - Status: http://{}/status", local);

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        cancel.cancelled().await;
        log::info!("Shutting down server");
    })
    .await
    .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::NameResolver;
    use crate::error_handling::LookupError;
    use crate::geoip::{AsnSource, DatabaseMetadata, GeoSource};
    use crate::lookup::{AsnRecord, GeoRecord, LookupService};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::extract::connect_info::MockConnectInfo;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::net::IpAddr;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Resolves IP literals only.
    struct LiteralResolver;

    #[async_trait]
    impl NameResolver for LiteralResolver {
        async fn lookup_addrs(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
            Ok(vec![host.parse()?])
        }
    }

    struct NoData;

    impl GeoSource for NoData {
        fn lookup_geo(&self, _ip: IpAddr) -> Result<GeoRecord, LookupError> {
            Err(LookupError::Geo)
        }
    }

    impl AsnSource for NoData {
        fn lookup_asn(&self, _ip: IpAddr) -> Result<AsnRecord, LookupError> {
            Err(LookupError::Asn)
        }
    }

    fn test_state() -> AppState {
        let service = LookupService::new(Arc::new(LiteralResolver), Arc::new(NoData), Arc::new(NoData));
        let metadata = DatabaseMetadata {
            source: "GeoLite2-City.mmdb".to_string(),
            database_type: "GeoLite2-City".to_string(),
            version: "2024-01-02".to_string(),
            build_epoch: 1_704_153_600,
            ip_version: 6,
            node_count: 42,
        };
        AppState::new(service, vec![metadata])
    }

    fn test_router(state: AppState) -> Router {
        router(state).layer(MockConnectInfo(SocketAddr::from(([203, 0, 113, 9], 51000))))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page_without_query_uses_peer_address() {
        let (status, body) = get_body(test_router(test_state()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="203.0.113.9""#));
        assert!(body.contains("IP地址: 203.0.113.9"));
    }

    #[tokio::test]
    async fn test_api_lookup_reports_both_database_failures() {
        let (status, body) = get_body(test_router(test_state()), "/api/lookup?ip=198.51.100.1").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["query"], "198.51.100.1");
        assert_eq!(json["address"], "198.51.100.1");
        assert_eq!(json["errors"][0]["stage"], "geo");
        assert_eq!(json["errors"][1]["stage"], "asn");
        assert!(json.get("geo").is_none());
    }

    #[tokio::test]
    async fn test_status_counts_lookups() {
        let state = test_state();
        let app = test_router(state.clone());
        let _ = get_body(app.clone(), "/?ip=not-an-address").await;
        let (status, body) = get_body(app, "/status").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["databases"][0]["database_type"], "GeoLite2-City");
        assert_eq!(json["lookups"]["total"], 1);
        assert_eq!(json["lookups"]["errors"]["dns"], 1);
        assert_eq!(json["lookups"]["errors"]["geo"], 0);
    }

    #[tokio::test]
    async fn test_metrics_lists_every_stage() {
        let (status, body) = get_body(test_router(test_state()), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("ip_locator_lookups_total 0"));
        for stage in ["dns", "geo", "asn"] {
            assert!(body.contains(&format!("ip_locator_lookup_errors_total{{stage=\"{stage}\"}} 0")));
        }
    }

    #[tokio::test]
    async fn test_start_server_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let result = start_server(&addr, test_state(), CancellationToken::new()).await;
        let error = format!("{:#}", result.unwrap_err());
        assert!(error.contains(&format!("Failed to bind server to {addr}")), "{error}");
    }

    #[tokio::test]
    async fn test_start_server_stops_on_cancel() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = start_server("127.0.0.1:0", test_state(), cancel).await;
        assert!(result.is_ok(), "{:?}", result.err());
    }
}
