//! Prometheus metrics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::error_handling::ErrorType;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let mut metrics = format!(
        r#"# HELP ip_locator_lookups_total Number of lookups answered
# TYPE ip_locator_lookups_total counter
ip_locator_lookups_total {}

# HELP ip_locator_uptime_seconds Seconds since the server started
# TYPE ip_locator_uptime_seconds gauge
ip_locator_uptime_seconds {}

# HELP ip_locator_lookup_errors_total Number of failed lookup stages
# TYPE ip_locator_lookup_errors_total counter
"#,
        state.stats.total_queries(),
        state.start_time.elapsed().as_secs_f64(),
    );

    for error in ErrorType::iter() {
        metrics.push_str(&format!(
            "ip_locator_lookup_errors_total{{stage=\"{}\"}} {}\n",
            error.as_str(),
            state.stats.get_error_count(error)
        ));
    }

    (StatusCode::OK, metrics).into_response()
}
