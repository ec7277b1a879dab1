//! Forward DNS resolution.
//!
//! This module resolves a normalized host token to a single IP address using
//! `hickory-resolver`. IP literals are answered by the resolver itself without
//! a network round trip, so they pass through unchanged.
//!
//! Resolution goes through the [`NameResolver`] trait so the lookup pipeline
//! can be driven by any resolver implementation.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host_to_ip, NameResolver};
