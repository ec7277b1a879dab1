//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure of one stage of a single lookup.
///
/// The messages are static for the database stages; the DNS message carries
/// the token that could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum LookupError {
    /// The host could not be resolved, or resolved to no addresses.
    #[error("Unable to resolve IP or domain: {host}")]
    Dns {
        /// The normalized token handed to the resolver
        host: String,
    },

    /// The address is missing from the City database or the database could not be read.
    #[error("GeoLite2-City database lookup failed")]
    Geo,

    /// The address is missing from the ASN database or the database could not be read.
    #[error("GeoLite2-ASN database lookup failed")]
    Asn,
}

/// Categories of lookup failures tracked in [`super::LookupStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    DnsResolutionError,
    GeoLookupError,
    AsnLookupError,
}

impl ErrorType {
    /// Returns a short label for the error type (used in status output)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsResolutionError => "dns",
            ErrorType::GeoLookupError => "geo",
            ErrorType::AsnLookupError => "asn",
        }
    }
}

impl From<&LookupError> for ErrorType {
    fn from(error: &LookupError) -> Self {
        match error {
            LookupError::Dns { .. } => ErrorType::DnsResolutionError,
            LookupError::Geo => ErrorType::GeoLookupError,
            LookupError::Asn => ErrorType::AsnLookupError,
        }
    }
}
