//! Client address discovery.
//!
//! When a request carries no explicit query, the requester's own address is
//! looked up instead. Reverse proxies report it in headers; otherwise the
//! transport peer address is used.

use axum::http::HeaderMap;

use crate::config::{HEADER_X_FORWARDED_FOR, HEADER_X_REAL_IP};

/// Derives the client address of a request.
///
/// Precedence, first match wins:
/// 1. `X-Forwarded-For`: the entry before the first comma, trimmed
/// 2. `X-Real-IP`: verbatim
/// 3. `peer` with its port removed, or `peer` as-is if it has no port
///
/// Nothing is validated here; a malformed value fails later at resolution.
pub fn client_ip(headers: &HeaderMap, peer: &str) -> String {
    if let Some(forwarded) = header_value(headers, HEADER_X_FORWARDED_FOR) {
        let first = forwarded.split(',').next().unwrap_or(forwarded);
        return first.trim().to_string();
    }

    if let Some(real_ip) = header_value(headers, HEADER_X_REAL_IP) {
        return real_ip.to_string();
    }

    match split_host_port(peer) {
        Some((host, _port)) => host.to_string(),
        None => peer.to_string(),
    }
}

/// Returns a header value if present, valid visible ASCII and non-empty.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// Splits `host:port` or `[host]:port` into host and port.
///
/// Returns `None` when there is no port, when a bracketed host is not followed
/// by `:port`, or when an unbracketed host itself contains a colon (a bare
/// IPv6 address).
pub(crate) fn split_host_port(hostport: &str) -> Option<(&str, &str)> {
    if let Some(rest) = hostport.strip_prefix('[') {
        let end = rest.find(']')?;
        let host = &rest[..end];
        let port = rest[end + 1..].strip_prefix(':')?;
        if port.contains(':') || port.contains('[') || port.contains(']') {
            return None;
        }
        return Some((host, port));
    }

    let colon = hostport.rfind(':')?;
    let (host, port) = (&hostport[..colon], &hostport[colon + 1..]);
    if host.contains(':') || host.contains('[') || host.contains(']') {
        return None;
    }
    Some((host, port))
}
