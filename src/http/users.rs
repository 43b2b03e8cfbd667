use crate::clients::ActorClient;
use crate::http::error::ApiError;
use crate::http::AppState;
use crate::model::{User, UserFields, UserId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Path ids that are not plain decimal digits name no user.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::UserNotFound);
    }
    raw.parse::<UserId>().map_err(|_| ApiError::UserNotFound)
}

fn parse_fields(body: &Bytes) -> Result<UserFields, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidInput)?;
    Ok(UserFields::from_json(&value)?)
}

pub(crate) async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let params = parse_fields(&body)?;
    let user = state.user_client.create_user(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "user_id": user.user_id,
        })),
    ))
}

pub(crate) async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.user_client.list().await?))
}

pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    Ok(Json(state.user_client.get_user(user_id).await?))
}

pub(crate) async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    let update = parse_fields(&body)?;
    state.user_client.update_user(user_id, update).await?;
    Ok(Json(json!({ "message": "User details updated successfully" })))
}

pub(crate) async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;
    state.user_client.delete(user_id).await?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
