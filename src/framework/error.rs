//! # Framework Errors
//!
//! Common error types used between the actor, its clients and the store.

use crate::framework::store::StoreError;

/// Errors that can occur within the record framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
