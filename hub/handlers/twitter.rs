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
    path = "/twitter/timeline",
    params(
        ("query" = Option<String>, Query, description = "Recent-search query (default `trending`)"),
        ("max_results" = Option<u32>, Query, description = "Maximum tweets (default 5)")
    ),
    responses(
        (status = 200, description = "Recent tweets with author and metric fields"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "social"
)]
pub async fn get_twitter_timeline(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let query = text_param(&params, "query", "trending");
    let max_results = text_param(&params, "max_results", "5");

    Ok(Json(state.providers.fetch_twitter_timeline(query, max_results).await?))
}
