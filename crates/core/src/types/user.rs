//! Administrative users.
//!
//! Users are stored but no endpoint reads them yet. Usernames are matched
//! exactly on lookup; the store does not reject duplicates on create.

use secrecy::SecretString;

use super::UserId;

/// A stored administrative user.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: SecretString,
}

impl User {
    /// Build a stored user from insert fields and an assigned id.
    #[must_use]
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Fields for creating a user.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password: SecretString,
}

impl NewUser {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
