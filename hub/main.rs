mod utils;
mod models;
mod handlers;
mod middleware;


use std::sync::Arc;

use axum::{
    Json, Router,
    response::Html,
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;
use tower_http::cors::CorsLayer;

use common::utils::config::Config;
use common::database::{DbPool, create_pool, database_host};
use common::services::ProviderClient;

use utils::error::Result;
use handlers::{
    users::get_users,
    weather::get_weather,
    news::get_news,
    media::{get_images, get_instagram_media},
    video::{get_tiktok_trending, search_youtube},
    twitter::get_twitter_timeline,
};

#[derive(Clone)]
pub struct AppState {
    pub providers: Arc<ProviderClient>,
    // Held open for the lifetime of the server; no route queries it yet.
    #[allow(dead_code)]
    pub pool: DbPool,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Social Hub",
        description = "Relays requests to third-party user, weather, news, image, video and social APIs.",
        version = "0.1.0",
        license(
            name = "MIT OR Apache-2.0",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        handlers::users::get_users,
        handlers::weather::get_weather,
        handlers::news::get_news,
        handlers::media::get_images,
        handlers::media::get_instagram_media,
        handlers::video::get_tiktok_trending,
        handlers::video::search_youtube,
        handlers::twitter::get_twitter_timeline,
    ),
    components(
        schemas(
            models::message::ErrorMessage,
        )
    ),
    tags(
        (name = "users", description = "Placeholder user data"),
        (name = "weather", description = "Current weather by city"),
        (name = "news", description = "News article search"),
        (name = "media", description = "Photos and Instagram media"),
        (name = "video", description = "TikTok and YouTube videos"),
        (name = "social", description = "Twitter timeline search"),
    )
)]
struct ApiDoc;

async fn serve_docs() -> Html<String> {
    Html(Scalar::new(ApiDoc::openapi()).to_html())
}

async fn serve_openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn create_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/weather/{city}", get(get_weather))
        .route("/news", get(get_news))
        .route("/images", get(get_images))
        .route("/tiktok/trending", get(get_tiktok_trending))
        .route("/youtube/search", get(search_youtube))
        .route("/instagram/media", get(get_instagram_media))
        .route("/twitter/timeline", get(get_twitter_timeline))
        .route("/api-docs/openapi.json", get(serve_openapi_json))
        .route("/docs", get(serve_docs))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(middleware::request_logger)),
        )
}

/// Opens the database pool and proves it is reachable.
async fn bootstrap_database(config: &Config) -> Result<DbPool> {
    let pool = create_pool(config).await?;
    tracing::info!("Database connected: {}", database_host(&config.database_url));
    Ok(pool)
}

#[tokio::main]
async fn main() -> Result<()> {
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install crypto provider");

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    for key in config.credentials.missing() {
        tracing::warn!("{} is not set; requests to that provider will fail", key);
    }

    let pool = match bootstrap_database(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState {
        providers: Arc::new(ProviderClient::new(&config)?),
        pool,
    };

    let app = create_router().with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("AI Social Hub starting on {}", addr);
    tracing::info!(
        "API documentation available at http://localhost:{}/docs",
        config.api_port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
