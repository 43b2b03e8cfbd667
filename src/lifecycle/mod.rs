//! # Lifecycle
//!
//! Startup and shutdown: configuration, logging, and the [`UserSystem`] that owns the actor.

pub mod config;
pub mod tracing;
pub mod user_system;

pub use config::*;
pub use self::tracing::setup_tracing;
pub use user_system::*;
