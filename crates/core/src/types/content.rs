//! Portfolio content items.
//!
//! A content item is one displayable unit of the site: the biography text,
//! a video reference, or a social link. Items are listed per category in
//! ascending `display_order`; inactive items are kept but never listed.

use serde::{Deserialize, Serialize};

use super::ContentItemId;

/// The categories of content the site produces.
///
/// The stored `type` of a [`ContentItem`] is an open string; these are the
/// values the site itself writes and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Biography prose.
    Bio,
    /// A video URL handed to the embed widget.
    Video,
    /// A social profile link.
    Social,
}

impl ContentKind {
    /// The wire/storage tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Video => "video",
            Self::Social => "social",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Store-assigned identifier, immutable.
    pub id: ContentItemId,
    /// Category tag (`bio`, `video`, `social`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    pub title: String,
    /// Prose for bios, a URL for videos and social links.
    pub content: String,
    /// Inactive items are excluded from listings.
    pub is_active: bool,
    /// Sort key within a listing.
    pub display_order: i32,
}

impl ContentItem {
    /// Build a stored item from insert fields and an assigned id.
    #[must_use]
    pub fn from_new(id: ContentItemId, new: NewContentItem) -> Self {
        Self {
            id,
            kind: new.kind,
            title: new.title,
            content: new.content,
            is_active: new.is_active,
            display_order: new.display_order,
        }
    }
}

/// Fields for creating a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

const fn default_active() -> bool {
    true
}

impl NewContentItem {
    /// An active item of the given kind.
    #[must_use]
    pub fn new(
        kind: ContentKind,
        title: impl Into<String>,
        content: impl Into<String>,
        display_order: i32,
    ) -> Self {
        Self {
            kind: kind.as_str().to_owned(),
            title: title.into(),
            content: content.into(),
            is_active: true,
            display_order,
        }
    }
}

/// A partial update to a content item.
///
/// Only the fields that are `Some` are written; the id can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl ContentItemPatch {
    /// Returns true if the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.is_active.is_none()
            && self.display_order.is_none()
    }

    /// Merge the supplied fields onto `item`.
    pub fn apply(self, item: &mut ContentItem) {
        if let Some(kind) = self.kind {
            item.kind = kind;
        }
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(content) = self.content {
            item.content = content;
        }
        if let Some(is_active) = self.is_active {
            item.is_active = is_active;
        }
        if let Some(display_order) = self.display_order {
            item.display_order = display_order;
        }
    }
}
