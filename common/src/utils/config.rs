use super::error::{ApiError, Result};
use serde::Deserialize;
use std::env;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/ai_social_hub";
// The bootstrap holds a single persistent connection unless told otherwise.
const DEFAULT_MAX_DB_CONNECTIONS: &str = "1";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub database_url: String,
    pub database_ca_cert: Option<String>,
    pub max_db_connections: u32,
    pub api_port: u16,
    pub credentials: Credentials,
    pub endpoints: Endpoints,
}

/// Per-provider secrets. Empty strings mean "not configured".
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Credentials {
    pub weather_api_key: String,
    pub news_api_key: String,
    pub unsplash_access_key: String,
    pub rapidapi_key: String,
    pub youtube_api_key: String,
    pub instagram_access_token: String,
    pub twitter_bearer_token: String,
}

impl Credentials {
    fn from_env() -> Self {
        Self {
            weather_api_key: env::var("WEATHER_API_KEY").unwrap_or_default(),
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            unsplash_access_key: env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default(),
            rapidapi_key: env::var("RAPIDAPI_KEY").unwrap_or_default(),
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            instagram_access_token: env::var("INSTAGRAM_ACCESS_TOKEN").unwrap_or_default(),
            twitter_bearer_token: env::var("TWITTER_BEARER_TOKEN").unwrap_or_default(),
        }
    }

    /// Names of the environment variables that were left empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("WEATHER_API_KEY", &self.weather_api_key),
            ("NEWS_API_KEY", &self.news_api_key),
            ("UNSPLASH_ACCESS_KEY", &self.unsplash_access_key),
            ("RAPIDAPI_KEY", &self.rapidapi_key),
            ("YOUTUBE_API_KEY", &self.youtube_api_key),
            ("INSTAGRAM_ACCESS_TOKEN", &self.instagram_access_token),
            ("TWITTER_BEARER_TOKEN", &self.twitter_bearer_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    pub users: String,
    pub weather: String,
    pub news: String,
    pub images: String,
    pub tiktok: String,
    pub youtube: String,
    pub instagram: String,
    pub twitter: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            users: "https://jsonplaceholder.typicode.com/users".to_owned(),
            weather: "https://api.openweathermap.org/data/2.5/weather".to_owned(),
            news: "https://newsapi.org/v2/everything".to_owned(),
            images: "https://api.unsplash.com/photos/random".to_owned(),
            tiktok: "https://tiktok-video-no-watermark2.p.rapidapi.com/feed/search".to_owned(),
            youtube: "https://www.googleapis.com/youtube/v3/search".to_owned(),
            instagram: "https://graph.instagram.com/me/media".to_owned(),
            twitter: "https://api.twitter.com/2/tweets/search/recent".to_owned(),
        }
    }
}

impl Endpoints {
    fn from_env() -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: String| env::var(key).unwrap_or(default);

        Self {
            users: pick("USERS_API_URL", defaults.users),
            weather: pick("WEATHER_API_URL", defaults.weather),
            news: pick("NEWS_API_URL", defaults.news),
            images: pick("IMAGES_API_URL", defaults.images),
            tiktok: pick("TIKTOK_API_URL", defaults.tiktok),
            youtube: pick("YOUTUBE_API_URL", defaults.youtube),
            instagram: pick("INSTAGRAM_API_URL", defaults.instagram),
            twitter: pick("TWITTER_API_URL", defaults.twitter),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            database_ca_cert: env::var("DATABASE_CA_CERT").ok(),
            max_db_connections: Self::parse_env("MAX_DB_CONNECTIONS", DEFAULT_MAX_DB_CONNECTIONS)?,
            api_port: Self::parse_env("PORT", "8080")?,
            credentials: Credentials::from_env(),
            endpoints: Endpoints::from_env(),
        })
    }

    fn parse_env<T>(key: &str, default: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Debug,
    {
        env::var(key)
            .as_deref()
            .unwrap_or(default)
            .parse()
            .map_err(|_| ApiError::Config(format!("Invalid {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_only_empty_credentials() {
        let credentials = Credentials {
            weather_api_key: "w".into(),
            news_api_key: "  ".into(),
            youtube_api_key: "y".into(),
            ..Default::default()
        };

        assert_eq!(
            credentials.missing(),
            vec![
                "NEWS_API_KEY",
                "UNSPLASH_ACCESS_KEY",
                "RAPIDAPI_KEY",
                "INSTAGRAM_ACCESS_TOKEN",
                "TWITTER_BEARER_TOKEN",
            ]
        );
    }

    #[test]
    fn default_endpoints_point_at_real_providers() {
        let endpoints = Endpoints::default();
        assert!(endpoints.weather.starts_with("https://api.openweathermap.org/"));
        assert!(endpoints.twitter.ends_with("/2/tweets/search/recent"));
        assert!(endpoints.tiktok.contains("rapidapi.com"));
    }

    #[test]
    fn parse_env_falls_back_to_default() {
        let port: u16 = Config::parse_env("AI_SOCIAL_HUB_UNSET_TEST_PORT", "8080").unwrap();
        assert_eq!(port, 8080);

        let err = Config::parse_env::<u16>("AI_SOCIAL_HUB_UNSET_TEST_PORT", "nope").unwrap_err();
        assert!(matches!(err, ApiError::Config(msg) if msg == "Invalid AI_SOCIAL_HUB_UNSET_TEST_PORT"));
    }

    #[test]
    fn database_pool_defaults_to_one_connection() {
        let max: u32 =
            Config::parse_env("AI_SOCIAL_HUB_UNSET_TEST_MAX_DB", DEFAULT_MAX_DB_CONNECTIONS).unwrap();
        assert_eq!(max, 1);
    }
}
