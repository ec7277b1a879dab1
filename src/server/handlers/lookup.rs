//! Lookup handlers: the HTML page and its JSON twin.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};

use super::super::types::{AppState, LookupParams, LookupResponse};
use crate::lookup::LookupOutcome;
use crate::query::lookup_target;
use crate::render::render_page;

/// Lookup page. Always 200; failures are part of the page.
pub async fn page_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(params): Query<LookupParams>,
    headers: HeaderMap,
) -> Response {
    let (target, outcome) = run_query(&state, &params, &headers, peer).await;

    match render_page(&target, &outcome) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!("Failed to render lookup page: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render page: {}", e),
            )
                .into_response()
        }
    }
}

/// Same lookup as the page, as JSON.
pub async fn api_lookup_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(params): Query<LookupParams>,
    headers: HeaderMap,
) -> Response {
    let (_, outcome) = run_query(&state, &params, &headers, peer).await;
    Json(LookupResponse::from(&outcome)).into_response()
}

/// Picks the target (explicit `ip` parameter or the client address), looks it
/// up and records the outcome.
async fn run_query(
    state: &AppState,
    params: &LookupParams,
    headers: &HeaderMap,
    peer: SocketAddr,
) -> (String, LookupOutcome) {
    let target = lookup_target(params.ip.as_deref(), headers, &peer.to_string());
    log::debug!("Lookup request from {peer} for {target:?}");

    let outcome = state.lookup.lookup(&target).await;
    state.stats.record(&outcome);
    (target, outcome)
}
