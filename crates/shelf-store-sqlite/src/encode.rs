//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Sort keys and directions
//! map to fixed SQL fragments — user input never reaches query text except
//! through bound parameters.

use chrono::{DateTime, Utc};
use shelf_core::{
  item::Item,
  query::{SortKey, SortOrder},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

pub fn encode_sort_key(k: SortKey) -> &'static str {
  match k {
    SortKey::Name => "name",
    SortKey::CreatedAt => "createdAt",
    SortKey::UpdatedAt => "updatedAt",
  }
}

pub fn encode_sort_order(o: SortOrder) -> &'static str {
  match o {
    SortOrder::Asc => "ASC",
    SortOrder::Desc => "DESC",
  }
}

// ─── Raw rows ────────────────────────────────────────────────────────────────

/// An `items` row as read from SQLite, timestamps still text.
pub struct RawItem {
  pub id:          i64,
  pub name:        String,
  pub description: String,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawItem {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      description: row.get(2)?,
      created_at:  row.get(3)?,
      updated_at:  row.get(4)?,
    })
  }

  pub fn into_item(self) -> Result<Item> {
    Ok(Item {
      id:          self.id,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}
