//! IP address resolution.

use std::net::IpAddr;

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Source of forward DNS answers.
///
/// Implementations return every address for `host` in the order the
/// underlying mechanism produced them.
#[async_trait]
pub trait NameResolver: Send + Sync {
    async fn lookup_addrs(&self, host: &str) -> Result<Vec<IpAddr>>;
}

#[async_trait]
impl NameResolver for TokioAsyncResolver {
    async fn lookup_addrs(&self, host: &str) -> Result<Vec<IpAddr>> {
        let response = self.lookup_ip(host).await.map_err(Error::new)?;
        Ok(response.iter().collect())
    }
}

/// Resolves a hostname (or IP literal) to an IP address.
///
/// # Arguments
///
/// * `host` - The normalized host token to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The first address in resolver order. No preference is given to IPv4 or
/// IPv6.
///
/// # Errors
///
/// Returns `LookupError::Dns` if resolution fails or yields no addresses.
pub async fn resolve_host_to_ip(
    host: &str,
    resolver: &dyn NameResolver,
) -> Result<IpAddr, LookupError> {
    let dns_error = || LookupError::Dns {
        host: host.to_string(),
    };

    let addrs = resolver.lookup_addrs(host).await.map_err(|e| {
        log::warn!("DNS resolution failed for {host}: {e}");
        dns_error()
    })?;

    let ip = addrs.into_iter().next().ok_or_else(|| {
        log::warn!("DNS resolution for {host} returned no addresses");
        dns_error()
    })?;

    log::debug!("Resolved {host} to {ip}");
    Ok(ip)
}
