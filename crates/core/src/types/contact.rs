//! Contact form submission and validation.

use serde::{Deserialize, Serialize};

use super::{Email, NewMessage};

/// Raw contact form fields as submitted.
///
/// Every field defaults to empty so a missing field surfaces as a
/// validation error rather than a body parsing failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field errors found in one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("invalid form data: {}", join_fields(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// A single error for one field.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    /// The failed field checks, in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the failed fields.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactForm {
    pub const MAX_NAME_LENGTH: usize = 100;
    pub const MIN_MESSAGE_LENGTH: usize = 10;
    pub const MAX_MESSAGE_LENGTH: usize = 5000;

    /// Trim and check every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing each field that failed.
    pub fn validate(self) -> Result<NewMessage, ValidationErrors> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len == 0 {
            errors.push(FieldError::new("name", "Name is required."));
        } else if name_len > Self::MAX_NAME_LENGTH {
            errors.push(FieldError::new(
                "name",
                format!(
                    "Name must be at most {} characters.",
                    Self::MAX_NAME_LENGTH
                ),
            ));
        }

        let email = match Email::parse(self.email.trim()) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(FieldError::new(
                    "email",
                    "Please enter a valid email address.",
                ));
                None
            }
        };

        let message = self.message.trim();
        let message_len = message.chars().count();
        if message_len < Self::MIN_MESSAGE_LENGTH {
            errors.push(FieldError::new(
                "message",
                format!(
                    "Message must be at least {} characters.",
                    Self::MIN_MESSAGE_LENGTH
                ),
            ));
        } else if message_len > Self::MAX_MESSAGE_LENGTH {
            errors.push(FieldError::new(
                "message",
                format!(
                    "Message must be at most {} characters.",
                    Self::MAX_MESSAGE_LENGTH
                ),
            ));
        }

        match email {
            Some(email) if errors.is_empty() => Ok(NewMessage {
                name: name.to_owned(),
                email,
                message: message.to_owned(),
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}
