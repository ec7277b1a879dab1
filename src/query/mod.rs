//! Query preparation.
//!
//! This module turns an incoming request into the host-or-IP token the lookup
//! pipeline resolves:
//! - URL/host extraction from the explicit `ip` parameter
//! - Client address discovery from proxy headers or the peer address when no
//!   explicit query was given

mod client_ip;
mod normalize;

// Re-export public API
pub use client_ip::client_ip;
pub use normalize::normalize;

use axum::http::HeaderMap;

/// Picks the token to look up for a request.
///
/// A non-blank explicit query is normalized and used as-is, even when it
/// normalizes to nothing. Only a missing or blank query falls back to the
/// requesting client's own address.
pub fn lookup_target(explicit: Option<&str>, headers: &HeaderMap, peer: &str) -> String {
    let explicit = explicit.unwrap_or_default().trim();
    if !explicit.is_empty() {
        return normalize(explicit);
    }

    let client = client_ip(headers, peer);
    log::debug!("No explicit query, falling back to client address {client:?}");
    normalize(&client)
}
