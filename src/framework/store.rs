//! # Persistence Interface
//!
//! [`RecordStore`] is the port between a `ResourceActor` and whatever holds the records.
//! Every method is a single atomic call against the backing store; the actor never wraps
//! several calls in a transaction.

use crate::framework::entity::ActorEntity;
use async_trait::async_trait;

/// Errors reported by a [`RecordStore`] implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached or failed while executing a call.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A record with the same identifier is already present.
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// A persisted record could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Abstract store of records of type `T`, keyed by `T::Id`.
#[async_trait]
pub trait RecordStore<T: ActorEntity>: Send + Sync + 'static {
    /// Inserts a new record. Fails with [`StoreError::Duplicate`] if the id is taken.
    async fn insert_one(&self, record: T) -> Result<(), StoreError>;

    /// Fetches the record with the given id.
    async fn find_one(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Fetches every record, in ascending id order.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// Replaces the record carrying `record.id()` if, and only if, it exists.
    ///
    /// Returns `false` when nothing matched. The existence check and the write are one call.
    async fn replace_one(&self, record: T) -> Result<bool, StoreError>;

    /// Removes the record with the given id. Returns `false` when nothing was removed.
    async fn delete_one(&self, id: T::Id) -> Result<bool, StoreError>;

    /// Returns the largest persisted id, or `None` for an empty store.
    async fn max_id(&self) -> Result<Option<T::Id>, StoreError>;
}
