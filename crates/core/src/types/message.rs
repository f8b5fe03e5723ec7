//! Contact form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Email, MessageId};

/// A stored contact message.
///
/// Messages are created unread and only ever change by being marked read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    pub email: Email,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Build an unread message from validated fields.
    #[must_use]
    pub fn from_new(id: MessageId, new: NewMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at,
            read: false,
        }
    }
}

/// Validated fields for a new message.
///
/// Produced by [`ContactForm::validate`](super::ContactForm::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: Email,
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_json_shape() {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let message = Message::from_new(
            MessageId::new(1),
            NewMessage {
                name: "Jo Ann".to_string(),
                email: Email::parse("jo@example.com").unwrap(),
                message: "Looking forward to the show!".to_string(),
            },
            created_at,
        );

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "jo@example.com");
        assert_eq!(value["createdAt"], "2025-03-01T12:30:00Z");
        assert_eq!(value["read"], false);
    }
}
