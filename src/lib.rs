//! # User Service
//!
//! > **User records over HTTP, with the user's orders fetched from next door.**
//!
//! The service keeps a persisted collection of users (`user_id`, `username`, `email`) and
//! exposes create/read/update/delete over JSON. A read-through endpoint relays a user's
//! orders from a separate order service.
//!
//! ## Core Concepts
//!
//! ### One Actor Owns the Records
//! Every CRUD request is a message to a single [`ResourceActor<User>`](framework::ResourceActor).
//! It validates the payload, draws an id from the [`IdAllocator`](framework::IdAllocator) and
//! writes through a [`RecordStore`](framework::RecordStore). Requests are handled one at a
//! time, so an update and a delete on the same id can never interleave.
//!
//! ### Ids Survive Restarts
//! At startup the allocator is seeded from the largest stored `user_id`, so a restarted
//! service continues where it left off. Ids freed by a delete are only reused if that id
//! was the largest and the service restarts.
//!
//! ### Upstream Failures Look the Same
//! A timeout, a refused connection, an error status and an unreadable body from the order
//! service all become one [`OrderError::Upstream`](order_proxy::OrderError::Upstream), which the
//! HTTP layer renders as `500 {"message": "Error fetching orders"}`.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the allocator and the store trait.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`RecordStore`](framework::RecordStore).
//!
//! ### 2. The Records ([`model`], [`user_actor`], [`persistence`])
//! The [`User`](model::User) entity, its error type, and the in-memory and SQLite stores.
//!
//! ### 3. The Interface ([`clients`], [`order_proxy`])
//! [`UserClient`](clients::UserClient) wraps the actor; [`OrderClient`](clients::OrderClient)
//! talks to the order service.
//!
//! ### 4. The Edge ([`http`], [`lifecycle`])
//! The axum router, configuration, logging, and [`UserSystem`](lifecycle::UserSystem), which
//! opens the store and starts the actor.
//!
//! ## Quick Start
//!
//! ```bash
//! # SQLite file in the working directory, order service at http://order-microservice:80
//! RUST_LOG=info cargo run
//!
//! # Throwaway in-memory store, local order service
//! USER_SERVICE_STORE=memory ORDER_SERVICE_URL=http://127.0.0.1:8080 cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_proxy;
pub mod persistence;
pub mod user_actor;
