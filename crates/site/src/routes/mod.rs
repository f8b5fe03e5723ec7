//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store reachable)
//!
//! # Content API
//! GET  /api/content            - All active content items
//! GET  /api/content/{type}     - Active items of one type
//!
//! # Contact API
//! POST /api/contact            - Submit the contact form (rate limited)
//!
//! # Anything else under /api
//! *    /api/*                  - 404 JSON
//! ```

pub mod contact;
pub mod content;
pub mod health;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::contact_rate_limiter;
use crate::state::AppState;

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create the content API routes router.
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list))
        .route("/{type}", get(content::list_by_type))
}

/// Create the contact API routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit))
        .route_layer(contact_rate_limiter())
}

/// Create the JSON API router, mounted at `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/content", content_routes())
        .nest("/contact", contact_routes())
        .fallback(api_not_found)
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api", api_routes())
}

/// Unknown API paths get a JSON 404 instead of the client app.
async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
