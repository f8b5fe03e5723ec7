//! Songbird Core - Shared domain types.
//!
//! This crate provides the types used by the Songbird portfolio site:
//! - `site` - Public site binary and its content/messaging API
//! - `integration-tests` - End-to-end tests against the running API
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage,
//! no HTTP. Storage lives in the site crate behind its `Storage` trait.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, emails, content items, messages, users and
//!   contact form validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
