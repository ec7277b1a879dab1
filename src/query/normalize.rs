//! Query normalization.
//!
//! Turns whatever the user typed (IP literal, hostname, or URL) into a bare
//! host-or-IP token suitable for DNS resolution.

use std::net::IpAddr;

use url::{Host, Url};

/// Reduces a raw query to a bare host or IP.
///
/// Input that parses as an absolute URL is replaced by its host, without the
/// port and without IPv6 brackets. A URL without a host (`mailto:a@b`, or
/// `example.com:8080`, which parses with scheme `example.com`) yields an empty
/// string, meaning nothing to look up. Anything else is returned unchanged: a
/// bare hostname or IP is already normalized, and unparseable input is still
/// valid input for the resolver to reject. Never fails.
///
/// # Examples
///
/// ```
/// use ip_locator::query::normalize;
///
/// assert_eq!(normalize("https://example.com:8443/path?q=1"), "example.com");
/// assert_eq!(normalize("http://[2001:db8::1]:8080/"), "2001:db8::1");
/// assert_eq!(normalize("example.com"), "example.com");
/// assert_eq!(normalize("8.8.8.8"), "8.8.8.8");
/// assert_eq!(normalize("example.com:8080"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    // Literals like "fe80::1" would otherwise parse as scheme "fe80"
    if raw.parse::<IpAddr>().is_ok() {
        return raw.to_string();
    }

    let parsed = match Url::parse(raw) {
        Ok(parsed) if !parsed.scheme().is_empty() => parsed,
        _ => return raw.to_string(),
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        // "localhost:8080", "mailto:a@b": a scheme but no host to extract
        None => String::new(),
    }
}
