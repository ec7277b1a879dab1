//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, LookupStats};

/// Prints a one-line summary of the lookups served, followed by the failure
/// counts per stage.
pub fn print_final_statistics(stats: &LookupStats, elapsed_seconds: f64) {
    let total = stats.total_queries();
    info!(
        "Served {} lookup{} in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        elapsed_seconds
    );
    print_error_statistics(stats);
}

/// Prints the failure counts per stage to the log.
pub fn print_error_statistics(stats: &LookupStats) {
    let total_errors = stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Lookup failures ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}
