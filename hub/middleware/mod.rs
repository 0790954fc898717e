use std::time::Instant;

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

/// Logs each proxied call; upstream failures surface as 5xx here.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    tracing::info!(method = %method, path = %path, "Request started");

    let response = next.run(req).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::warn!(method = %method, path = %path, status = status.as_u16(), duration_ms, "Request failed");
    } else {
        tracing::info!(method = %method, path = %path, status = status.as_u16(), duration_ms, "Request completed");
    }

    response
}
