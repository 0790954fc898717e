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
    path = "/tiktok/trending",
    params(
        ("count" = Option<u32>, Query, description = "Number of videos (default 5)")
    ),
    responses(
        (status = 200, description = "Trending TikTok videos"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "video"
)]
pub async fn get_tiktok_trending(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let count = text_param(&params, "count", "5");

    Ok(Json(state.providers.fetch_tiktok_trending(count).await?))
}

#[utoipa::path(
    get,
    path = "/youtube/search",
    params(
        ("q" = Option<String>, Query, description = "Search terms (default `trending`)"),
        ("maxResults" = Option<u32>, Query, description = "Maximum results (default 5)")
    ),
    responses(
        (status = 200, description = "YouTube video search results"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "video"
)]
pub async fn search_youtube(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let q = text_param(&params, "q", "trending");
    let max_results = text_param(&params, "maxResults", "5");

    Ok(Json(state.providers.search_youtube(q, max_results).await?))
}
