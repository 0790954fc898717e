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
    path = "/news",
    params(
        ("q" = Option<String>, Query, description = "Search terms (default `technology`)"),
        ("pageSize" = Option<u32>, Query, description = "Articles per page (default 5)")
    ),
    responses(
        (status = 200, description = "Articles relayed from the news API"),
        (status = 500, description = "Upstream failure", body = crate::models::message::ErrorMessage)
    ),
    tag = "news"
)]
pub async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>> {
    let q = text_param(&params, "q", "technology");
    let page_size = text_param(&params, "pageSize", "5");

    Ok(Json(state.providers.fetch_news(q, page_size).await?))
}
