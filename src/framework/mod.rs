//! Generic record framework for persistent resources.
//!
//! This module provides the building blocks the service is assembled from: an
//! actor that owns CRUD state transitions for one record type, the client used to
//! talk to it, the persistence port it writes through and the identifier
//! allocator it draws ids from.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that validates, allocates and persists records
//! - [`ResourceClient`] - Type-safe handle for sending requests to a [`ResourceActor`]
//! - [`RecordStore`] - Persistence interface the actor writes through
//! - [`IdAllocator`] - Monotonic identifier source, recovered from the store
//! - [`FrameworkError`] / [`StoreError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod allocator;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use allocator::IdAllocator;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{RecordStore, StoreError};
