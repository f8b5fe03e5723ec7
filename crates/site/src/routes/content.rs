//! Content listing route handlers.
//!
//! Feed the biography, video list and social link sections of the page.

use axum::{
    Json,
    extract::{Path, State},
};
use songbird_core::ContentItem;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every active content item.
///
/// GET /api/content
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentItem>>> {
    let items = state
        .storage()
        .content_items(None)
        .map_err(AppError::ContentUnavailable)?;
    tracing::debug!(count = items.len(), "Listed content items");
    Ok(Json(items))
}

/// List active content items of one type (`bio`, `video`, `social`).
///
/// GET /api/content/{type}
///
/// Unknown types produce an empty list, not an error.
#[instrument(skip(state))]
pub async fn list_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<ContentItem>>> {
    let items = state
        .storage()
        .content_items(Some(&kind))
        .map_err(AppError::ContentUnavailable)?;
    tracing::debug!(count = items.len(), "Listed content items");
    Ok(Json(items))
}
