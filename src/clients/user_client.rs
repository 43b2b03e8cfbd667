use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
///
/// This is the manager-facing API: every failure comes back as a [`UserError`], with
/// validation failures raised inside the actor recovered as [`UserError::ValidationError`].
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::Store(store_error) => UserError::DatabaseError(store_error.to_string()),
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                UserError::ActorCommunicationError(other.to_string())
            }
        }
    }
}

impl UserClient {
    /// Validates, allocates an id and persists a new user.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Like [`ActorClient::get`], but a missing user is an error.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Replaces both fields of an existing user.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }
}
