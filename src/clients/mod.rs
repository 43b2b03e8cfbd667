//! Type-safe clients: [`UserClient`] wraps a [`ResourceClient`](crate::framework::ResourceClient),
//! [`OrderClient`] talks HTTP to the order service.

pub mod actor_client;
pub mod order_client;
pub mod user_client;

pub use actor_client::*;
pub use order_client::*;
pub use user_client::*;
