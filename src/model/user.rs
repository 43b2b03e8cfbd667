use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a [`User`]. Strictly positive once issued.
pub type UserId = u64;

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

/// The `{username, email}` pair accepted by create and update.
///
/// Updates are full replacements, so both operations carry the same fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub username: String,
    pub email: String,
}

/// Payload for creating a new user.
pub type UserCreate = UserFields;

/// Payload for replacing an existing user's details.
pub type UserUpdate = UserFields;

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `user_id` - Identifier issued by the allocator
    /// * `username` - User's display name
    /// * `email` - User's email address
    pub fn new(user_id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl UserFields {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Extracts the fields from a request body.
    ///
    /// Both fields must be present, must be JSON strings and must be non-empty. No format
    /// check is applied to `email`.
    pub fn from_json(body: &Value) -> Result<Self, UserError> {
        let Some(object) = body.as_object() else {
            return Err(UserError::ValidationError(
                "request body must be a JSON object".to_string(),
            ));
        };
        let username = required_text(object.get("username"), "username")?;
        let email = required_text(object.get("email"), "email")?;
        Ok(Self::new(username, email))
    }

    /// Rejects empty fields.
    pub fn validate(&self) -> Result<(), UserError> {
        if self.username.is_empty() {
            return Err(UserError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        if self.email.is_empty() {
            return Err(UserError::ValidationError(
                "email must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn required_text<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str, UserError> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        Some(Value::String(_)) => Err(UserError::ValidationError(format!(
            "{field} must not be empty"
        ))),
        Some(_) => Err(UserError::ValidationError(format!(
            "{field} must be a string"
        ))),
        None => Err(UserError::ValidationError(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_both_fields() {
        let fields = UserFields::from_json(&json!({
            "username": "alice",
            "email": "a@x.com",
            "ignored": true
        }))
        .unwrap();
        assert_eq!(fields, UserFields::new("alice", "a@x.com"));
    }

    #[test]
    fn test_from_json_rejects_missing_email() {
        let err = UserFields::from_json(&json!({ "username": "alice" })).unwrap_err();
        assert_eq!(err, UserError::ValidationError("email is required".to_string()));
    }

    #[test]
    fn test_from_json_rejects_empty_username() {
        let err = UserFields::from_json(&json!({ "username": "", "email": "a@x.com" })).unwrap_err();
        assert!(matches!(err, UserError::ValidationError(_)));
    }

    #[test]
    fn test_from_json_rejects_non_text_fields() {
        for body in [
            json!({ "username": 12, "email": "a@x.com" }),
            json!({ "username": "alice", "email": ["a@x.com"] }),
            json!({ "username": null, "email": "a@x.com" }),
        ] {
            assert!(UserFields::from_json(&body).is_err(), "accepted {body}");
        }
    }

    #[test]
    fn test_from_json_rejects_non_object_body() {
        assert!(UserFields::from_json(&json!(["alice", "a@x.com"])).is_err());
        assert!(UserFields::from_json(&json!("alice")).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        assert!(UserFields::new("alice", "").validate().is_err());
        assert!(UserFields::new("alice", "a@x.com").validate().is_ok());
    }

    #[test]
    fn test_user_serializes_flat() {
        let user = User::new(3, "carol", "c@x.com");
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "user_id": 3, "username": "carol", "email": "c@x.com" })
        );
    }
}
