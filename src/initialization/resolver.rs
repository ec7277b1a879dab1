//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix) when it
/// can be read and lists at least one name server, falling back to hickory's
/// default upstream servers otherwise. Timeouts are kept short so an
/// unresponsive server fails the query quickly instead of holding the request
/// open.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// request handlers.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, opts) = resolver_config(hickory_resolver::system_conf::read_system_conf());
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

/// Picks the resolver configuration from the system one, if usable, and applies
/// the lookup tunables.
fn resolver_config<E: Display>(
    system: Result<(ResolverConfig, ResolverOpts), E>,
) -> (ResolverConfig, ResolverOpts) {
    let (mut config, mut opts) = match system {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Could not read system DNS configuration ({e}), using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    if config.name_servers().is_empty() {
        log::warn!("System DNS configuration lists no name servers, using defaults");
        config = ResolverConfig::default();
    }

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Names are looked up exactly as given, no search-domain expansion
    opts.ndots = 0;

    (config, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::NameServerConfigGroup;

    fn assert_tunables(opts: &ResolverOpts) {
        assert_eq!(opts.timeout, Duration::from_secs(DNS_TIMEOUT_SECS));
        assert_eq!(opts.attempts, DNS_ATTEMPTS);
        assert_eq!(opts.ndots, 0);
    }

    #[test]
    fn test_unreadable_system_config_uses_defaults() {
        let (config, opts) = resolver_config::<&str>(Err("permission denied"));
        assert!(!config.name_servers().is_empty());
        assert_tunables(&opts);
    }

    #[test]
    fn test_system_config_without_name_servers_uses_defaults() {
        let empty = ResolverConfig::from_parts(None, vec![], NameServerConfigGroup::new());
        assert!(empty.name_servers().is_empty());

        let (config, opts) = resolver_config::<&str>(Ok((empty, ResolverOpts::default())));
        assert!(!config.name_servers().is_empty());
        assert_tunables(&opts);
    }

    #[test]
    fn test_usable_system_config_is_kept() {
        let system = ResolverConfig::cloudflare();
        let expected = system.name_servers().len();

        let (config, opts) = resolver_config::<&str>(Ok((system, ResolverOpts::default())));
        assert_eq!(config.name_servers().len(), expected);
        assert_tunables(&opts);
    }

    #[tokio::test]
    async fn test_init_resolver_answers_literals() {
        let resolver = init_resolver();
        let answer = resolver
            .lookup_ip("192.0.2.1")
            .await
            .expect("IP literal should resolve without network access");
        assert_eq!(answer.iter().next(), Some("192.0.2.1".parse().unwrap()));
    }
}
