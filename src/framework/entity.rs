//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every persisted record must implement to be
//! managed by the generic `ResourceActor`. It names the identifier and payload types and the
//! validation hooks the actor runs before it touches the allocator or the store.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that record types satisfy, the `ResourceActor`
//! logic (validate, allocate, persist, answer) is written *once*.
//!
//! Associated types keep the payloads apart: a `User` is created from a `UserCreate` payload,
//! and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate_create`]
//! - [`ActorEntity::validate_update`]
//!
//! The default implementations accept everything (`Ok(())`).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by ResourceActor.
///
/// # Identifiers
/// Identifiers are allocated by an [`IdAllocator`](crate::framework::IdAllocator), which
/// speaks `u64`. `Id` converts both ways so the allocator stays independent of the record
/// type, and is `Ord` so stores can keep a natural ascending order.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Copy + Eq + Ord + Hash + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to replace an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// Hook failures are boxed into
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError) and can
    /// be recovered by downcasting on the client side.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this record.
    fn id(&self) -> Self::Id;

    /// Called before an identifier is allocated. A rejected payload never consumes an id.
    fn validate_create(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the full record from a freshly allocated id and a validated payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Called before the store is asked to replace a record.
    fn validate_update(_update: &Self::Update) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the replacement record for `id`. Updates are full replacements, so the
    /// previous state is not needed.
    fn from_update_params(id: Self::Id, update: Self::Update) -> Self;
}
