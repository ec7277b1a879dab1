//! Lookup statistics tracking.
//!
//! This module provides thread-safe counters for queries served and for the
//! failures of each pipeline stage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;
use crate::lookup::LookupOutcome;

/// Thread-safe lookup statistics tracker.
///
/// Tracks the number of queries answered and the number of failures per
/// [`ErrorType`] using atomic counters, allowing concurrent access from every
/// request handler. All types are initialized to zero on creation.
///
/// Counters live only in memory; nothing about individual queries is kept.
pub struct LookupStats {
    queries: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        LookupStats {
            queries: AtomicUsize::new(0),
            errors,
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in LookupStats initialization.",
                error
            );
        }
    }

    /// Records a finished lookup: one query, plus one error per failed stage.
    ///
    /// [`LookupOutcome::Empty`] is not counted since no lookup took place.
    pub fn record(&self, outcome: &LookupOutcome) {
        if matches!(outcome, LookupOutcome::Empty) {
            return;
        }

        self.queries.fetch_add(1, Ordering::Relaxed);
        for failure in outcome.errors() {
            self.increment_error(ErrorType::from(failure));
        }
    }

    /// Get the count for an error type.
    ///
    /// Returns 0 if the error type is not in the map (should never happen if properly initialized).
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Number of lookups recorded so far.
    pub fn total_queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
