//! Access log for API requests.
//!
//! Emits one `info` event per `/api` request with its request id, method,
//! path, status and duration. Static asset and health requests are left to `TraceLayer`.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use super::RequestId;

/// Log completed API requests.
pub async fn api_log_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !is_api_path(&path) {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "api request"
    );

    response
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}
