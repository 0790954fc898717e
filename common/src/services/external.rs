use crate::services::provider::Provider;
use crate::utils::config::{Config, Credentials, Endpoints};
use crate::utils::error::{ApiError, Result};

use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde_json::Value;

const TIKTOK_API_HOST: &str = "tiktok-video-no-watermark2.p.rapidapi.com";
const INSTAGRAM_MEDIA_FIELDS: &str =
    "id,caption,media_type,media_url,permalink,thumbnail_url,timestamp,username";
const TWEET_FIELDS: &str = "created_at,author_id,public_metrics";
const TWEET_USER_FIELDS: &str = "name,username,profile_image_url";

/// Outbound side of every proxy route: one GET per call, body relayed as JSON.
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl ProviderClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent("ai-social-hub/1.0")
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            credentials: config.credentials.clone(),
            endpoints: config.endpoints.clone(),
        })
    }

    pub async fn fetch_users(&self) -> Result<Value> {
        self.fetch(Provider::Users, self.client.get(&self.endpoints.users))
            .await
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<Value> {
        let request = self.client.get(&self.endpoints.weather).query(&[
            ("q", city),
            ("appid", self.credentials.weather_api_key.as_str()),
            ("units", "metric"),
        ]);
        self.fetch(Provider::Weather, request).await
    }

    pub async fn fetch_news(&self, q: &str, page_size: &str) -> Result<Value> {
        let request = self.client.get(&self.endpoints.news).query(&[
            ("q", q),
            ("pageSize", page_size),
            ("apiKey", self.credentials.news_api_key.as_str()),
        ]);
        self.fetch(Provider::News, request).await
    }

    pub async fn fetch_images(&self, query: &str, count: &str) -> Result<Value> {
        let request = self.client.get(&self.endpoints.images).query(&[
            ("query", query),
            ("count", count),
            ("client_id", self.credentials.unsplash_access_key.as_str()),
        ]);
        self.fetch(Provider::Images, request).await
    }

    pub async fn fetch_tiktok_trending(&self, count: &str) -> Result<Value> {
        let request = self
            .client
            .get(&self.endpoints.tiktok)
            .query(&[("keywords", "trending"), ("count", count)])
            .header("X-RapidAPI-Key", &self.credentials.rapidapi_key)
            .header("X-RapidAPI-Host", TIKTOK_API_HOST);
        self.fetch(Provider::TikTok, request).await
    }

    pub async fn search_youtube(&self, q: &str, max_results: &str) -> Result<Value> {
        let request = self.client.get(&self.endpoints.youtube).query(&[
            ("part", "snippet"),
            ("q", q),
            ("maxResults", max_results),
            ("type", "video"),
            ("key", self.credentials.youtube_api_key.as_str()),
        ]);
        self.fetch(Provider::YouTube, request).await
    }

    pub async fn fetch_instagram_media(&self, limit: &str) -> Result<Value> {
        let request = self.client.get(&self.endpoints.instagram).query(&[
            ("fields", INSTAGRAM_MEDIA_FIELDS),
            ("access_token", self.credentials.instagram_access_token.as_str()),
            ("limit", limit),
        ]);
        self.fetch(Provider::Instagram, request).await
    }

    pub async fn fetch_twitter_timeline(&self, query: &str, max_results: &str) -> Result<Value> {
        let request = self
            .client
            .get(&self.endpoints.twitter)
            .query(&[
                ("query", query),
                ("max_results", max_results),
                ("tweet.fields", TWEET_FIELDS),
                ("user.fields", TWEET_USER_FIELDS),
            ])
            .bearer_auth(&self.credentials.twitter_bearer_token);
        self.fetch(Provider::Twitter, request).await
    }

    async fn fetch(&self, provider: Provider, request: RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::upstream(provider, format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(ApiError::upstream(
                provider,
                format!("HTTP error: {} - {}", status, body),
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::upstream(provider, format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&response_text)
            .map_err(|e| ApiError::upstream(provider, format!("Failed to parse API response: {}", e)))
    }
}
