//! Error types for the order aggregation proxy.

use thiserror::Error;

/// Errors that can occur while fetching orders from the order service.
///
/// Every failure of a fetch (connection refused, timeout, error status, undecodable body)
/// is reported as [`OrderError::Upstream`]. The message is for logs only and is never
/// returned to HTTP callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order service could not produce a usable answer.
    #[error("Order service error: {0}")]
    Upstream(String),

    /// The HTTP client could not be built.
    #[error("Order client configuration error: {0}")]
    Client(String),
}
