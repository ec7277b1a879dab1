//! Web server HTTP handlers.

mod lookup;
mod metrics;
mod status;

pub use lookup::{api_lookup_handler, page_handler};
pub use metrics::metrics_handler;
pub use status::status_handler;
