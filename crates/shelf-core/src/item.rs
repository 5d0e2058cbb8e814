//! Item — the sole persisted resource type.
//!
//! Items are mutable in place (unlike an append-only log): the update
//! operation merges changed fields over the stored row and bumps
//! `updatedAt`. The store assigns `id` on creation; it is never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted item record, exactly as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  pub id:          i64,
  pub name:        String,
  pub description: String,
  /// Set once at creation; immutable thereafter.
  pub created_at:  DateTime<Utc>,
  /// Equal to `created_at` at creation; reset on every successful update.
  pub updated_at:  DateTime<Utc>,
}

/// A validated creation request. Construct via [`crate::validate::create_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  /// 1–100 characters.
  pub name:        String,
  /// ≤1000 characters; defaults to the empty string.
  pub description: String,
}

/// A validated partial update. Construct via [`crate::validate::update_item`].
///
/// At least one field is `Some`; fields left `None` retain their stored
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPatch {
  pub name:        Option<String>,
  pub description: Option<String>,
}
