//! Content and message storage.
//!
//! # Collections
//!
//! - `content` - Portfolio content items (bio, videos, social links)
//! - `messages` - Contact form submissions
//! - `users` - Administrative users (not read by any route yet)
//!
//! Each collection assigns its own identifiers, starting at 1 and strictly
//! increasing. Identifiers are never reused after a delete.
//!
//! Route handlers depend only on the [`Storage`] trait, so a durable backing
//! can replace [`MemStorage`] without touching the API layer.

mod memory;
pub mod seed;

use songbird_core::{
    ContentItem, ContentItemId, ContentItemPatch, Message, MessageId, NewContentItem, NewMessage,
    NewUser, User, UserId,
};
use thiserror::Error;

pub use memory::MemStorage;

/// Errors raised by a storage backend.
///
/// Missing records are never errors: lookups return `Option` and
/// mutations by id return `Option`/`bool`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding a collection lock.
    #[error("{0} collection lock poisoned")]
    Poisoned(&'static str),

    /// Every identifier in a collection has been handed out.
    #[error("{0} identifiers exhausted")]
    IdsExhausted(&'static str),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage operations used by the API layer.
pub trait Storage: Send + Sync {
    /// Store a content item under the next content id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn create_content_item(&self, new: NewContentItem) -> Result<ContentItem>;

    /// List active content items, optionally only those of one `kind`.
    ///
    /// Ordered by ascending `display_order`; equal keys keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn content_items(&self, kind: Option<&str>) -> Result<Vec<ContentItem>>;

    /// Look up a content item by id, active or not.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn content_item(&self, id: ContentItemId) -> Result<Option<ContentItem>>;

    /// Merge `patch` onto an existing item. Returns `None` if `id` is absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn update_content_item(
        &self,
        id: ContentItemId,
        patch: ContentItemPatch,
    ) -> Result<Option<ContentItem>>;

    /// Remove a content item. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn delete_content_item(&self, id: ContentItemId) -> Result<bool>;

    /// Store an unread message stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn create_message(&self, new: NewMessage) -> Result<Message>;

    /// All messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn messages(&self) -> Result<Vec<Message>>;

    /// Look up a message by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn message(&self, id: MessageId) -> Result<Option<Message>>;

    /// Mark a message read. Returns whether the message exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn mark_message_read(&self, id: MessageId) -> Result<bool>;

    /// Store a user under the next user id. Duplicate usernames are accepted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn create_user(&self, new: NewUser) -> Result<User>;

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn user(&self, id: UserId) -> Result<Option<User>>;

    /// Look up a user by exact, case-sensitive username.
    ///
    /// If several users share the name, the earliest created wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only if the backend itself fails.
    fn user_by_username(&self, username: &str) -> Result<Option<User>>;
}
