//! Core types for Songbird.
//!
//! This module provides type-safe wrappers for the site's domain concepts.

pub mod contact;
pub mod content;
pub mod email;
pub mod id;
pub mod message;
pub mod user;

pub use contact::{ContactForm, FieldError, ValidationErrors};
pub use content::{ContentItem, ContentItemPatch, ContentKind, NewContentItem};
pub use email::{Email, EmailError};
pub use id::*;
pub use message::{Message, NewMessage};
pub use user::{NewUser, User};
