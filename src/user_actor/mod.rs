//! # User Actor
//!
//! The user record manager: a [`ResourceActor`] over [`User`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use user_service::framework::IdAllocator;
//! use user_service::model::{User, UserCreate};
//! use user_service::persistence::InMemoryStore;
//! use user_service::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryStore::<User>::new());
//!     let allocator = Arc::new(IdAllocator::recover::<User>(store.as_ref()).await?);
//!
//!     let (actor, client) = user_actor::new(32, store, allocator);
//!     tokio::spawn(actor.run());
//!
//!     let user = client
//!         .create_user(UserCreate::new("alice", "alice@example.com"))
//!         .await?;
//!     assert_eq!(user.user_id, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::{IdAllocator, RecordStore, ResourceActor};
use crate::model::User;
use std::sync::Arc;

/// Creates a new User actor and its client.
///
/// The allocator must already be seeded from `store` (see [`IdAllocator::recover`]).
pub fn new(
    buffer_size: usize,
    store: Arc<dyn RecordStore<User>>,
    allocator: Arc<IdAllocator>,
) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, store, allocator);
    let client = UserClient::new(generic_client);

    (actor, client)
}
