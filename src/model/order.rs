use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Orders for one user, exactly as the order service returned them.
///
/// The body is never inspected or reshaped; it is whatever JSON array or object the
/// upstream `GET /orders/{user_id}` produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Orders(pub Value);

impl Orders {
    pub fn into_inner(self) -> Value {
        self.0
    }
}
