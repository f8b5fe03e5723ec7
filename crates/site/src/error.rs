//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server faults to Sentry
//! before responding to the client. Route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use songbird_core::{FieldError, ValidationErrors};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Listing content items failed.
    #[error("Content not listed: {0}")]
    ContentUnavailable(StoreError),

    /// Storing a contact message failed.
    #[error("Message not stored: {0}")]
    MessageNotSent(StoreError),

    /// Submitted form data failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
///
/// Form endpoints carry `success: false` and, for validation failures, the
/// field errors; other endpoints only carry `message`.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_)
            | Self::ContentUnavailable(_)
            | Self::MessageNotSent(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    const fn is_server_fault(&self) -> bool {
        matches!(
            self,
            Self::Store(_)
                | Self::ContentUnavailable(_)
                | Self::MessageNotSent(_)
                | Self::Internal(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Store(_) | Self::Internal(_) => ErrorBody {
                success: None,
                message: "Internal server error",
                errors: None,
            },
            Self::ContentUnavailable(_) => ErrorBody {
                success: None,
                message: "Failed to fetch content items",
                errors: None,
            },
            Self::MessageNotSent(_) => ErrorBody {
                success: Some(false),
                message: "Failed to send message",
                errors: None,
            },
            Self::Validation(errors) => ErrorBody {
                success: Some(false),
                message: "Invalid form data",
                errors: Some(errors.errors()),
            },
            Self::NotFound(_) => ErrorBody {
                success: None,
                message: "Not found",
                errors: None,
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
