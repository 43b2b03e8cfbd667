//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the record lifecycle:
///
/// - **Create**: Validates [`ActorEntity::Create`], allocates an id and inserts the record.
/// - **Get**: Fetches one record by id.
/// - **List**: Fetches every record in store order.
/// - **Update**: Validates [`ActorEntity::Update`] and replaces the record if it still exists.
/// - **Delete**: Removes the record.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
