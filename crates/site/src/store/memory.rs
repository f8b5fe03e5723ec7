//! In-memory storage backend.
//!
//! Each collection sits behind its own `RwLock` together with its id
//! counter, so id assignment and every read-modify-write happen under one
//! write guard. Records are kept in a `BTreeMap` keyed by id, which makes
//! iteration order equal to insertion order.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use songbird_core::{
    ContentItem, ContentItemId, ContentItemPatch, Message, MessageId, NewContentItem, NewMessage,
    NewUser, User, UserId,
};

use super::{Result, Storage, StoreError, seed};

/// One id-keyed collection and its next identifier.
///
/// `next_id` is `None` once the last representable id has been used.
#[derive(Debug)]
struct Collection<K, V> {
    name: &'static str,
    records: BTreeMap<K, V>,
    next_id: Option<K>,
}

impl<K: Ord + Copy, V: Clone> Collection<K, V> {
    const fn new(name: &'static str, first: K) -> Self {
        Self {
            name,
            records: BTreeMap::new(),
            next_id: Some(first),
        }
    }

    fn insert(
        &mut self,
        next: impl Fn(K) -> Option<K>,
        build: impl FnOnce(K) -> V,
    ) -> Result<V> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted(self.name))?;
        self.next_id = next(id);
        let record = build(id);
        self.records.insert(id, record.clone());
        Ok(record)
    }
}

/// Process-local store with one lock per collection.
#[derive(Debug)]
pub struct MemStorage {
    content: RwLock<Collection<ContentItemId, ContentItem>>,
    messages: RwLock<Collection<MessageId, Message>>,
    users: RwLock<Collection<UserId, User>>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Create a store pre-populated with the seed content (ids 1-6).
    #[must_use]
    pub fn new() -> Self {
        let mut content = Collection::new("content", ContentItemId::FIRST);
        for new in seed::seed_content() {
            if let Err(e) = insert_content(&mut content, new) {
                tracing::error!(error = %e, "Failed to seed content item");
            }
        }
        tracing::debug!(count = content.records.len(), "Seeded content items");

        Self {
            content: RwLock::new(content),
            ..Self::empty()
        }
    }

    /// Create a store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            content: RwLock::new(Collection::new("content", ContentItemId::FIRST)),
            messages: RwLock::new(Collection::new("messages", MessageId::FIRST)),
            users: RwLock::new(Collection::new("users", UserId::FIRST)),
        }
    }

    /// Store an unread message with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the message lock is poisoned, or
    /// `StoreError::IdsExhausted` once every message id has been used.
    pub fn create_message_at(
        &self,
        new: NewMessage,
        created_at: DateTime<Utc>,
    ) -> Result<Message> {
        let mut messages = write(&self.messages, "messages")?;
        let message = messages.insert(MessageId::next, |id| {
            Message::from_new(id, new, created_at)
        })?;
        tracing::debug!(id = %message.id, "Message created");
        Ok(message)
    }
}

fn insert_content(
    content: &mut Collection<ContentItemId, ContentItem>,
    new: NewContentItem,
) -> Result<ContentItem> {
    content.insert(ContentItemId::next, |id| ContentItem::from_new(id, new))
}

fn read<'a, T>(lock: &'a RwLock<T>, name: &'static str) -> Result<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| StoreError::Poisoned(name))
}

fn write<'a, T>(lock: &'a RwLock<T>, name: &'static str) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| StoreError::Poisoned(name))
}

impl Storage for MemStorage {
    fn create_content_item(&self, new: NewContentItem) -> Result<ContentItem> {
        let mut content = write(&self.content, "content")?;
        let item = insert_content(&mut content, new)?;
        tracing::debug!(id = %item.id, kind = %item.kind, "Content item created");
        Ok(item)
    }

    fn content_items(&self, kind: Option<&str>) -> Result<Vec<ContentItem>> {
        let content = read(&self.content, "content")?;
        let mut items: Vec<ContentItem> = content
            .records
            .values()
            .filter(|item| item.is_active && kind.is_none_or(|k| item.kind == k))
            .cloned()
            .collect();
        // Stable sort: equal display orders stay in id (insertion) order.
        items.sort_by_key(|item| item.display_order);
        Ok(items)
    }

    fn content_item(&self, id: ContentItemId) -> Result<Option<ContentItem>> {
        let content = read(&self.content, "content")?;
        Ok(content.records.get(&id).cloned())
    }

    fn update_content_item(
        &self,
        id: ContentItemId,
        patch: ContentItemPatch,
    ) -> Result<Option<ContentItem>> {
        if patch.is_empty() {
            return self.content_item(id);
        }

        let mut content = write(&self.content, "content")?;
        let Some(item) = content.records.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(item);
        tracing::debug!(id = %id, "Content item updated");
        Ok(Some(item.clone()))
    }

    fn delete_content_item(&self, id: ContentItemId) -> Result<bool> {
        let mut content = write(&self.content, "content")?;
        let removed = content.records.remove(&id).is_some();
        if removed {
            tracing::debug!(id = %id, "Content item deleted");
        }
        Ok(removed)
    }

    fn create_message(&self, new: NewMessage) -> Result<Message> {
        self.create_message_at(new, Utc::now())
    }

    fn messages(&self) -> Result<Vec<Message>> {
        let messages = read(&self.messages, "messages")?;
        let mut all: Vec<Message> = messages.records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn message(&self, id: MessageId) -> Result<Option<Message>> {
        let messages = read(&self.messages, "messages")?;
        Ok(messages.records.get(&id).cloned())
    }

    fn mark_message_read(&self, id: MessageId) -> Result<bool> {
        let mut messages = write(&self.messages, "messages")?;
        let Some(message) = messages.records.get_mut(&id) else {
            return Ok(false);
        };
        message.read = true;
        tracing::debug!(id = %id, "Message marked read");
        Ok(true)
    }

    fn create_user(&self, new: NewUser) -> Result<User> {
        let mut users = write(&self.users, "users")?;
        let user = users.insert(UserId::next, |id| User::from_new(id, new))?;
        tracing::debug!(id = %user.id, "User created");
        Ok(user)
    }

    fn user(&self, id: UserId) -> Result<Option<User>> {
        let users = read(&self.users, "users")?;
        Ok(users.records.get(&id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = read(&self.users, "users")?;
        Ok(users
            .records
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone};
    use songbird_core::{ContactForm, ContentKind, Email};

    use super::*;

    fn item(kind: &str, title: &str, display_order: i32) -> NewContentItem {
        NewContentItem {
            kind: kind.to_string(),
            title: title.to_string(),
            content: format!("https://example.com/{title}"),
            is_active: true,
            display_order,
        }
    }

    fn new_message(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: Email::parse("fan@example.com").unwrap(),
            message: "Looking forward to the show!".to_string(),
        }
    }

    fn ids(items: &[ContentItem]) -> Vec<i32> {
        items.iter().map(|i| i.id.as_i32()).collect()
    }

    // =========================================================================
    // Seeding
    // =========================================================================

    #[test]
    fn test_new_seeds_six_items_with_ids_1_to_6() {
        let store = MemStorage::new();
        let all = store.content_items(None).unwrap();
        assert_eq!(all.len(), 6);

        let mut seeded = ids(&all);
        seeded.sort_unstable();
        assert_eq!(seeded, vec![1, 2, 3, 4, 5, 6]);

        let next = store.create_content_item(item("bio", "extra", 9)).unwrap();
        assert_eq!(next.id, ContentItemId::new(7));
    }

    #[test]
    fn test_unfiltered_listing_orders_across_types() {
        let store = MemStorage::new();
        let all = store.content_items(None).unwrap();
        // Bio, first video and Facebook all share display order 1.
        assert_eq!(ids(&all), vec![1, 2, 4, 3, 5, 6]);
    }

    #[test]
    fn test_seeded_social_links_in_display_order() {
        let store = MemStorage::new();
        let social = store
            .content_items(Some(ContentKind::Social.as_str()))
            .unwrap();
        let titles: Vec<&str> = social.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Facebook", "Instagram", "YouTube"]);
    }

    #[test]
    fn test_empty_has_no_records() {
        let store = MemStorage::empty();
        assert!(store.content_items(None).unwrap().is_empty());
        assert!(store.messages().unwrap().is_empty());
    }

    // =========================================================================
    // Content items
    // =========================================================================

    #[test]
    fn test_create_ids_increase_by_one() {
        let store = MemStorage::empty();
        let created: Vec<i32> = (0..5)
            .map(|n| {
                store
                    .create_content_item(item("video", &format!("v{n}"), 5 - n))
                    .unwrap()
                    .id
                    .as_i32()
            })
            .collect();
        assert_eq!(created, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_create_stores_fields_as_given() {
        let store = MemStorage::empty();
        let mut new = item("video", "hidden", 4);
        new.is_active = false;
        let created = store.create_content_item(new).unwrap();
        assert!(!created.is_active);
        assert_eq!(created.display_order, 4);
        assert_eq!(store.content_item(created.id).unwrap(), Some(created));
    }

    #[test]
    fn test_filter_by_type_sorts_by_display_order() {
        let store = MemStorage::empty();
        let three = store.create_content_item(item("video", "c", 3)).unwrap();
        let one = store.create_content_item(item("video", "a", 1)).unwrap();
        let two = store.create_content_item(item("video", "b", 2)).unwrap();
        store.create_content_item(item("social", "x", 0)).unwrap();

        let videos = store.content_items(Some("video")).unwrap();
        assert_eq!(
            videos.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![one.id, two.id, three.id]
        );
    }

    #[test]
    fn test_equal_display_order_keeps_insertion_order() {
        let store = MemStorage::empty();
        let first = store.create_content_item(item("social", "first", 1)).unwrap();
        let second = store.create_content_item(item("social", "second", 1)).unwrap();
        let zero = store.create_content_item(item("social", "zero", 0)).unwrap();

        let social = store.content_items(Some("social")).unwrap();
        assert_eq!(
            social.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![zero.id, first.id, second.id]
        );
    }

    #[test]
    fn test_unknown_type_is_empty_not_error() {
        let store = MemStorage::new();
        assert!(store.content_items(Some("podcast")).unwrap().is_empty());
    }

    #[test]
    fn test_type_match_is_exact() {
        let store = MemStorage::new();
        assert!(store.content_items(Some("Video")).unwrap().is_empty());
    }

    #[test]
    fn test_inactive_items_never_listed() {
        let store = MemStorage::empty();
        let mut hidden = item("bio", "hidden", 1);
        hidden.is_active = false;
        let hidden = store.create_content_item(hidden).unwrap();
        let shown = store.create_content_item(item("bio", "shown", 2)).unwrap();

        assert_eq!(ids(&store.content_items(None).unwrap()), vec![shown.id.as_i32()]);
        assert_eq!(
            ids(&store.content_items(Some("bio")).unwrap()),
            vec![shown.id.as_i32()]
        );

        // Direct lookups bypass visibility
        assert!(store.content_item(hidden.id).unwrap().is_some());

        // Deactivating removes from listings, reactivating restores
        store
            .update_content_item(
                shown.id,
                ContentItemPatch {
                    is_active: Some(false),
                    ..ContentItemPatch::default()
                },
            )
            .unwrap();
        assert!(store.content_items(None).unwrap().is_empty());

        store
            .update_content_item(
                hidden.id,
                ContentItemPatch {
                    is_active: Some(true),
                    ..ContentItemPatch::default()
                },
            )
            .unwrap();
        assert_eq!(
            ids(&store.content_items(None).unwrap()),
            vec![hidden.id.as_i32()]
        );
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let store = MemStorage::new();
        let id = ContentItemId::new(2);
        let before = store.content_item(id).unwrap().unwrap();

        let updated = store
            .update_content_item(
                id,
                ContentItemPatch {
                    display_order: Some(5),
                    ..ContentItemPatch::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.display_order, 5);
        assert_eq!(
            ContentItem {
                display_order: before.display_order,
                ..updated.clone()
            },
            before
        );
        assert_eq!(store.content_item(id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_id_returns_none() {
        let store = MemStorage::new();
        let result = store
            .update_content_item(
                ContentItemId::new(99),
                ContentItemPatch {
                    display_order: Some(5),
                    ..ContentItemPatch::default()
                },
            )
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.content_items(None).unwrap().len(), 6);
        assert!(store.content_item(ContentItemId::new(99)).unwrap().is_none());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let store = MemStorage::new();
        let id = ContentItemId::FIRST;
        let before = store.content_item(id).unwrap();
        let after = store
            .update_content_item(id, ContentItemPatch::default())
            .unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_twice() {
        let store = MemStorage::new();
        let id = ContentItemId::new(3);
        assert!(store.delete_content_item(id).unwrap());
        assert!(store.content_item(id).unwrap().is_none());
        assert!(!store.delete_content_item(id).unwrap());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = MemStorage::empty();
        let first = store.create_content_item(item("bio", "a", 1)).unwrap();
        assert!(store.delete_content_item(first.id).unwrap());
        let second = store.create_content_item(item("bio", "b", 1)).unwrap();
        assert_eq!(first.id.next(), Some(second.id));
    }

    #[test]
    fn test_create_fails_once_ids_are_exhausted() {
        let store = MemStorage::empty();
        store.content.write().unwrap().next_id = Some(ContentItemId::new(i32::MAX));

        let last = store.create_content_item(item("bio", "last", 1)).unwrap();
        assert_eq!(last.id, ContentItemId::new(i32::MAX));

        let err = store
            .create_content_item(item("bio", "overflow", 1))
            .unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted("content")));
        assert_eq!(store.content_items(None).unwrap().len(), 1);
    }

    // =========================================================================
    // Messages
    // =========================================================================

    #[test]
    fn test_create_message_defaults() {
        let store = MemStorage::empty();
        let before = Utc::now();
        let message = store.create_message(new_message("Jo")).unwrap();
        assert_eq!(message.id, MessageId::FIRST);
        assert!(!message.read);
        assert!(message.created_at >= before);
        assert_eq!(store.message(message.id).unwrap(), Some(message));
    }

    #[test]
    fn test_messages_newest_first() {
        let store = MemStorage::empty();
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let middle = store
            .create_message_at(new_message("middle"), base)
            .unwrap();
        let oldest = store
            .create_message_at(new_message("oldest"), base - Duration::hours(2))
            .unwrap();
        let newest = store
            .create_message_at(new_message("newest"), base + Duration::minutes(5))
            .unwrap();

        let listed: Vec<MessageId> = store.messages().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(listed, vec![newest.id, middle.id, oldest.id]);
    }

    #[test]
    fn test_messages_with_equal_timestamps_keep_insertion_order() {
        let store = MemStorage::empty();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let a = store.create_message_at(new_message("a"), at).unwrap();
        let b = store.create_message_at(new_message("b"), at).unwrap();

        let listed: Vec<MessageId> = store.messages().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(listed, vec![a.id, b.id]);
    }

    #[test]
    fn test_mark_message_read() {
        let store = MemStorage::empty();
        let message = store.create_message(new_message("Jo")).unwrap();

        assert!(store.mark_message_read(message.id).unwrap());
        assert!(store.message(message.id).unwrap().unwrap().read);

        // Idempotent on an already-read message
        assert!(store.mark_message_read(message.id).unwrap());

        assert!(!store.mark_message_read(MessageId::new(42)).unwrap());
    }

    #[test]
    fn test_validated_form_is_storable() {
        let store = MemStorage::empty();
        let new = ContactForm {
            name: "Jo Ann".to_string(),
            email: "jo@example.com".to_string(),
            message: "Looking forward to the show!".to_string(),
        }
        .validate()
        .unwrap();
        let stored = store.create_message(new).unwrap();
        assert_eq!(stored.name, "Jo Ann");
    }

    // =========================================================================
    // Users
    // =========================================================================

    #[test]
    fn test_user_create_and_lookup() {
        let store = MemStorage::new();
        let user = store
            .create_user(NewUser::new("vocalist", "correct-horse-battery"))
            .unwrap();
        assert_eq!(user.id, UserId::FIRST);

        assert_eq!(
            store.user(user.id).unwrap().map(|u| u.username),
            Some("vocalist".to_string())
        );
        assert_eq!(
            store
                .user_by_username("vocalist")
                .unwrap()
                .map(|u| u.id),
            Some(user.id)
        );
        assert!(store.user_by_username("Vocalist").unwrap().is_none());
        assert!(store.user(UserId::new(2)).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_usernames_are_accepted() {
        // Uniqueness is advisory: create does not reject, lookup returns the earliest.
        let store = MemStorage::empty();
        let first = store.create_user(NewUser::new("admin", "one")).unwrap();
        let second = store.create_user(NewUser::new("admin", "two")).unwrap();
        assert_ne!(first.id, second.id);

        assert_eq!(
            store.user_by_username("admin").unwrap().map(|u| u.id),
            Some(first.id)
        );
    }

    // =========================================================================
    // Concurrency
    // =========================================================================

    #[test]
    fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(MemStorage::empty());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|n| {
                            store
                                .create_content_item(item("video", &format!("{t}-{n}"), n))
                                .unwrap()
                                .id
                                .as_i32()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=200).collect::<Vec<_>>());
    }
}
