//! ip_locator library: IP address, hostname and URL geolocation
//!
//! This library resolves a query (an IP literal, a hostname or a URL) to one
//! address and reports where it is located and which network operates it,
//! using the MaxMind GeoLite2 City and ASN databases.
//!
//! # Example
//!
//! ```no_run
//! use ip_locator::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8081,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod lookup;
pub mod query;
pub mod render;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{LookupError, LookupStats};
pub use lookup::{AsnRecord, GeoRecord, LookupOutcome, LookupService};
pub use server::{router, AppState};

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::app::{cancel_on_signal, print_final_statistics};
use crate::config::{ASN_DB_TYPE, CITY_DB_TYPE};
use crate::geoip::open_database;
use crate::initialization::init_resolver;

/// Opens both databases, then serves lookups until Ctrl-C or SIGTERM.
///
/// Startup is all-or-nothing: a database that cannot be opened aborts before
/// the listener is bound.
///
/// # Errors
///
/// Returns an error if a database cannot be opened or the server cannot bind
/// its address.
pub async fn run_server(config: Config) -> Result<()> {
    let city = open_database(&config.city_db, CITY_DB_TYPE)
        .await
        .context("Failed to open City database")?;
    let asn = open_database(&config.asn_db, ASN_DB_TYPE)
        .await
        .context("Failed to open ASN database")?;
    let databases = vec![city.metadata().clone(), asn.metadata().clone()];

    let resolver = init_resolver();
    let service = LookupService::new(resolver, Arc::new(city), Arc::new(asn));
    let state = AppState::new(service, databases);

    let cancel = CancellationToken::new();
    let signal_task = tokio::spawn(cancel_on_signal(cancel.clone()));

    let served = server::start_server(&config.listen_addr(), state.clone(), cancel.clone()).await;

    cancel.cancel();
    let _ = signal_task.await;
    print_final_statistics(&state.stats, state.start_time.elapsed().as_secs_f64());

    served
}
