//! # Generic Record Actor
//!
//! This module defines the `ResourceActor`, the component that owns the CRUD state
//! transitions for one record type. It validates payloads, draws identifiers from the
//! injected [`IdAllocator`] and writes through the injected [`RecordStore`].

use crate::framework::allocator::IdAllocator;
use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::store::RecordStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a persisted collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the receiver end of the channel
/// and shared handles to the store and the allocator. Messages are processed one at a time,
/// so every request sees the store as the previous request left it.
///
/// The allocator is injected rather than owned so that startup can seed it from the store
/// (see [`IdAllocator::recover`]) and tests can observe it.
///
/// ## Operations
///
/// * **Create**: `validate_create` -> `next_id` -> `from_create_params` -> `insert_one`.
/// * **Get**: `find_one`, `None` when absent.
/// * **List**: `find_all`.
/// * **Update**: `validate_update` -> `from_update_params` -> `replace_one`; zero matches is
///   [`FrameworkError::NotFound`].
/// * **Delete**: `delete_one`; zero rows removed is [`FrameworkError::NotFound`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Arc<dyn RecordStore<T>>,
    allocator: Arc<IdAllocator>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - Where records are persisted.
    /// * `allocator` - Where new identifiers come from.
    pub fn new(
        buffer_size: usize,
        store: Arc<dyn RecordStore<T>>,
        allocator: Arc<IdAllocator>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            allocator,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "user_service::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(
            entity_type,
            last_issued = self.allocator.last_issued(),
            "Actor started"
        );

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params).await;
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.find_one(id).await.map_err(FrameworkError::from);
                    let found = matches!(result, Ok(Some(_)));
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let result = self.store.find_all().await.map_err(FrameworkError::from);
                    if let Ok(items) = &result {
                        debug!(entity_type, size = items.len(), "List");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id, update).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Deleted"),
                        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, "Not found"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(
            entity_type,
            last_issued = self.allocator.last_issued(),
            "Shutdown"
        );
    }

    async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        T::validate_create(&params).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        let id = T::Id::from(self.allocator.next_id());
        let item = T::from_create_params(id, params);
        self.store.insert_one(item.clone()).await?;
        Ok(item)
    }

    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        T::validate_update(&update).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        let item = T::from_update_params(id, update);
        if self.store.replace_one(item.clone()).await? {
            Ok(item)
        } else {
            Err(FrameworkError::NotFound(id.to_string()))
        }
    }

    async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        if self.store.delete_one(id).await? {
            Ok(())
        } else {
            Err(FrameworkError::NotFound(id.to_string()))
        }
    }
}
