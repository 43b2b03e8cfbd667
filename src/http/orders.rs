use crate::http::error::ApiError;
use crate::http::users::parse_user_id;
use crate::http::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

/// Relays the order service's answer for this user. The user need not exist locally.
pub(crate) async fn get_user_orders(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    let orders = state.order_client.get_orders(user_id).await?;
    Ok(Json(orders.into_inner()))
}
