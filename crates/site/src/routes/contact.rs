//! Contact form route handlers.
//!
//! Stores submissions for the vocalist to read later. Nothing is emailed;
//! the stored message is the whole effect.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use songbird_core::{ContactForm, ValidationErrors};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for a stored submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Submit the contact form.
///
/// POST /api/contact
///
/// A body that is not a JSON object of strings is reported as a validation
/// failure on `body`, the same 400 shape as failed field checks.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactForm>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactResponse>)> {
    let Json(form) = payload.map_err(|rejection| {
        AppError::Validation(ValidationErrors::single("body", rejection.body_text()))
    })?;

    let new = form.validate().inspect_err(|errors| {
        tracing::info!(fields = ?errors.fields(), "Contact form rejected");
    })?;

    let message = state
        .storage()
        .create_message(new)
        .map_err(AppError::MessageNotSent)?;

    tracing::info!(message_id = %message.id, "Contact message stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            message: "Your message has been sent successfully!".to_string(),
        }),
    ))
}
