//! # Order Aggregation Proxy
//!
//! Read-through access to the external order service. Nothing fetched here is stored.
//!
//! A call is a single `GET {base_url}/orders/{user_id}` bounded by a timeout. There is no
//! retry and no circuit breaker: the attempt either yields the upstream body unchanged or a
//! single [`OrderError::Upstream`].
//!
//! ## Structure
//!
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory that builds an [`OrderClient`]

pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use std::time::Duration;

/// Upper bound on one call to the order service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates a client for the order service at `base_url` (e.g. `http://order-microservice:80`).
pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<OrderClient, OrderError> {
    OrderClient::new(base_url, timeout)
}
