use crate::order_proxy::OrderError;
use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// What an HTTP caller gets to see of a failure.
///
/// Each variant renders as a fixed `{"message": ...}` body; causes are logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InvalidInput,
    UserNotFound,
    OrdersUnavailable,
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::OrdersUnavailable | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput => "Invalid input data",
            ApiError::UserNotFound => "User not found",
            ApiError::OrdersUnavailable => "Error fetching orders",
            ApiError::Internal => "Internal server error",
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::ValidationError(_) => ApiError::InvalidInput,
            UserError::NotFound(_) => ApiError::UserNotFound,
            UserError::DatabaseError(_) | UserError::ActorCommunicationError(_) => {
                error!(error = %e, "User request failed");
                ApiError::Internal
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Upstream(_) => ApiError::OrdersUnavailable,
            OrderError::Client(_) => {
                error!(error = %e, "Order client misconfigured");
                ApiError::OrdersUnavailable
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_map_to_status_codes() {
        let cases = [
            (UserError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (UserError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (UserError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                UserError::ActorCommunicationError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_order_failures_share_one_message() {
        assert_eq!(
            ApiError::from(OrderError::Upstream("timed out".into())).message(),
            "Error fetching orders"
        );
        assert_eq!(
            ApiError::from(OrderError::Client("tls".into())),
            ApiError::OrdersUnavailable
        );
    }
}
