//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and per-query lookups
//! - Lookup statistics tracking (queries served, failures per stage)
//!
//! Per-query failures are categorized by the pipeline stage that produced them:
//! - **DNS**: terminal for the query, no enrichment is attempted
//! - **Geo**: local to the City lookup, the ASN branch still runs
//! - **ASN**: local to the ASN lookup, the City branch is kept

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{ErrorType, InitializationError, LookupError};
