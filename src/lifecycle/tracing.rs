//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Levels come from `RUST_LOG` (defaulting to `info`). The compact format hides the
//! crate/module prefix (`with_target(false)`); the actor tags its lines with `entity_type`
//! instead.
//!
//! ```bash
//! # Request lines, creates, updates, deletes, order fetches
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every Get/List
//! RUST_LOG=debug cargo run
//!
//! # Only the actor
//! RUST_LOG=user_service::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Startup**: store opened, allocator recovered (`last_issued`), actor started
//! - **Record Operations**: Create, Get, List, Update, Delete with ids and outcomes
//! - **HTTP Requests**: one span per request from `tower_http::trace::TraceLayer`
//! - **Order Fetches**: url, and on failure the stage, status and timeout flag
//!
//! With `RUST_LOG=info` a create followed by a failed order fetch reads:
//!
//! ```text
//! INFO Created entity_type="User" id=1
//! WARN get_orders{user_id=1}: Order service call failed url=http://order-microservice:80/orders/1 stage="request failed" timeout=true status=None
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "get_orders{user_id=1}")
        .init();
}
