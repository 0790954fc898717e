use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::Provider;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("{provider} request failed: {message}")]
    Upstream { provider: Provider, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn upstream(provider: Provider, message: impl Into<String>) -> Self {
        Self::Upstream {
            provider,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Upstream { provider, message } => {
                tracing::error!(provider = %provider, "{message}");
                provider.failure_message()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {e}");
                "Internal server error"
            }
            Self::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                "Configuration error"
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": message }))).into_response()
    }
}

impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(format!("IO error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upstream_error_hides_cause_behind_static_message() {
        let response =
            ApiError::upstream(Provider::News, "HTTP 401: invalid apiKey").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Error fetching news" }));
    }
}
