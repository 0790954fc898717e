use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{AppState, utils::error::Result};

#[utoipa::path(
    get,
    path = "/weather/{city}",
    params(
        ("city" = String, Path, description = "City name, passed to the provider as `q`")
    ),
    responses(
        (status = 200, description = "Current weather in metric units"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Value>> {
    Ok(Json(state.providers.fetch_weather(&city).await?))
}
