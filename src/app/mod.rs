//! Main application modules.
//!
//! Shutdown signal handling and the statistics summary printed on exit.

pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use shutdown::cancel_on_signal;
pub use statistics::{print_error_statistics, print_final_statistics};
