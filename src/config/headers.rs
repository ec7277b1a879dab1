//! HTTP header name constants.
//!
//! Headers consulted when deriving the client address of a request that did
//! not carry an explicit query.

/// Proxy-appended chain of client addresses, origin first
pub const HEADER_X_FORWARDED_FOR: &str = "X-Forwarded-For";
/// Single client address set by a reverse proxy
pub const HEADER_X_REAL_IP: &str = "X-Real-IP";
