//! Pure data structures: the persisted [`User`] record, its payloads, and the opaque order
//! payload relayed from the order service.

pub mod order;
pub mod user;

pub use order::*;
pub use user::*;
