//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::{AppState, ErrorCounts, LookupCounts, StatusResponse};
use crate::error_handling::ErrorType;

/// JSON status endpoint with database metadata and lookup counters
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;

    let response = StatusResponse {
        databases: state.databases.as_ref().clone(),
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        lookups: LookupCounts {
            total: stats.total_queries(),
            errors: ErrorCounts {
                total: stats.total_errors(),
                dns: stats.get_error_count(ErrorType::DnsResolutionError),
                geo: stats.get_error_count(ErrorType::GeoLookupError),
                asn: stats.get_error_count(ErrorType::AsnLookupError),
            },
        },
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
