//! Songbird site library.
//!
//! This crate provides the portfolio site's content and contact API as a
//! library, allowing it to be tested and reused. The binary in `main.rs`
//! only loads configuration, sets up telemetry and serves [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the full application router with its middleware stack.
///
/// When `static_dir` is configured and exists, non-API paths are served
/// from it with `index.html` as the single-page-app fallback.
pub fn app(state: AppState) -> Router {
    let mut router = routes::routes();

    if let Some(dir) = state.config().static_dir.as_deref() {
        if dir.is_dir() {
            tracing::info!(dir = %dir.display(), "Serving static client");
            let index = ServeFile::new(dir.join("index.html"));
            router = router.fallback_service(ServeDir::new(dir).fallback(index));
        } else {
            tracing::warn!(dir = %dir.display(), "Static directory missing, not serving client");
        }
    }

    router
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::api_log_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
