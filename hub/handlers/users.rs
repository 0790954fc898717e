use axum::{Json, extract::State};
use serde_json::Value;

use crate::{AppState, utils::error::Result};

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "User list relayed from the upstream API"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "users"
)]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Value>> {
    Ok(Json(state.providers.fetch_users().await?))
}
