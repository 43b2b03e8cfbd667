//! # Mock Clients
//!
//! Helpers for testing code that sits *around* a [`ResourceClient`] (error mapping in
//! `UserClient`, HTTP handlers) without spawning a [`ResourceActor`](crate::framework::ResourceActor)
//! or opening a store.
//!
//! [`create_mock_client`] returns a real client wired to a channel the test owns. The
//! `expect_*` helpers pull the next request off that channel and hand back its payload and
//! responder, so the test decides exactly what the "actor" answers.
//!
//! ```rust
//! use user_service::framework::mock::{create_mock_client, expect_get};
//! use user_service::model::User;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut requests) = create_mock_client::<User>(4);
//!
//!     let call = tokio::spawn(async move { client.get(7).await });
//!
//!     let (id, respond_to) = expect_get(&mut requests).await.expect("Expected Get request");
//!     assert_eq!(id, 7);
//!     respond_to.send(Ok(None)).unwrap();
//!
//!     assert!(call.await.unwrap().unwrap().is_none());
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::{ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
