//! [`RecordStore`](crate::framework::RecordStore) implementations.
//!
//! - [`InMemoryStore`] - process-local, for tests and `USER_SERVICE_STORE=memory`
//! - [`SqliteUserStore`] - durable `users` table, the default backend

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteUserStore;
