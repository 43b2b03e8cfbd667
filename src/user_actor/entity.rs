//! ActorEntity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] implementation that lets [`User`] be managed by
//! the generic [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Error = UserError;

    fn id(&self) -> UserId {
        self.user_id
    }

    fn validate_create(params: &UserCreate) -> Result<(), UserError> {
        params.validate()
    }

    /// Creates a new User from validated creation parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Self {
        Self::new(id, params.username, params.email)
    }

    fn validate_update(update: &UserUpdate) -> Result<(), UserError> {
        update.validate()
    }

    /// Builds the replacement record.
    ///
    /// # Fields Replaced
    /// - `username`: User's display name
    /// - `email`: User's email address
    ///
    /// `user_id` is taken from the request path and never changes.
    fn from_update_params(id: UserId, update: UserUpdate) -> Self {
        Self::new(id, update.username, update.email)
    }
}
