use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use std::collections::HashMap;

use crate::{
    AppState,
    utils::{
        error::Result,
        params::text_param,
    },
};

#[utoipa::path(
    get,
    path = "/images",
    params(
        ("query" = Option<String>, Query, description = "Photo topic (default `nature`)"),
        ("per_page" = Option<u32>, Query, description = "Number of random photos (default 10)")
    ),
    responses(
        (status = 200, description = "Random photos relayed from the image API"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "media"
)]
pub async fn get_images(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let query = text_param(&params, "query", "nature");
    let count = text_param(&params, "per_page", "10");

    Ok(Json(state.providers.fetch_images(query, count).await?))
}

#[utoipa::path(
    get,
    path = "/instagram/media",
    params(
        ("limit" = Option<u32>, Query, description = "Number of media items (default 5)")
    ),
    responses(
        (status = 200, description = "Media of the configured Instagram account"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "media"
)]
pub async fn get_instagram_media(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let limit = text_param(&params, "limit", "5");

    Ok(Json(state.providers.fetch_instagram_media(limit).await?))
}
