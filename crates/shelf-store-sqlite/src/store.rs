//! [`SqliteStore`] — the SQLite implementation of [`ItemStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use shelf_core::{
  item::{Item, ItemPatch, NewItem},
  query::{ItemPage, ItemQuery},
  store::ItemStore,
};

use crate::{
  Error, Result,
  encode::{RawItem, encode_dt, encode_sort_key, encode_sort_order},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Shelf item store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ItemStore impl ──────────────────────────────────────────────────────────

impl ItemStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewItem) -> Result<Item> {
    let now = Utc::now();
    let now_str = encode_dt(now);
    let NewItem { name, description } = input;

    let (id, name, description) = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (name, description, createdAt, updatedAt)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, description, now_str, now_str],
        )?;
        Ok((conn.last_insert_rowid(), name, description))
      })
      .await?;

    Ok(Item {
      id,
      name,
      description,
      created_at: now,
      updated_at: now,
    })
  }

  async fn list(&self, query: &ItemQuery) -> Result<ItemPage> {
    // Substring match over a lowercased token; the token is bound, never
    // spliced into the query text.
    let pattern   = query.search.as_ref().map(|s| format!("%{}%", s.to_lowercase()));
    let order_col = encode_sort_key(query.sort);
    let order_dir = encode_sort_order(query.order);
    let limit_val  = i64::from(query.limit);
    let offset_val = query.offset as i64;

    let (total, raws): (i64, Vec<RawItem>) = self
      .conn
      .call(move |conn| {
        // Build the WHERE clause from independently-parameterized
        // fragments joined by a fixed conjunction.
        let mut conds: Vec<&'static str> = vec![];
        if pattern.is_some() {
          conds.push("(LOWER(name) LIKE ?1 OR LOWER(description) LIKE ?1)");
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        // Total matching rows before the limit/offset slice.
        let count_sql = format!("SELECT COUNT(*) FROM items {where_clause}");
        let total: i64 = match pattern.as_deref() {
          Some(p) => conn.query_row(&count_sql, rusqlite::params![p], |r| r.get(0))?,
          None => conn.query_row(&count_sql, [], |r| r.get(0))?,
        };

        let sql = format!(
          "SELECT id, name, description, createdAt, updatedAt
           FROM items {where_clause}
           ORDER BY {order_col} {order_dir}
           LIMIT ?2 OFFSET ?3"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![pattern.as_deref(), limit_val, offset_val],
            RawItem::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((total, rows))
      })
      .await?;

    Ok(ItemPage {
      total: total as u64,
      items: raws
        .into_iter()
        .map(RawItem::into_item)
        .collect::<Result<_>>()?,
    })
  }

  async fn get(&self, id: i64) -> Result<Option<Item>> {
    let raw: Option<RawItem> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, description, createdAt, updatedAt
               FROM items WHERE id = ?1",
              rusqlite::params![id],
              RawItem::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawItem::into_item).transpose()
  }

  async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>> {
    let now_str = encode_dt(Utc::now());
    let ItemPatch { name, description } = patch;

    let raw: Option<RawItem> = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, name, description, createdAt, updatedAt
             FROM items WHERE id = ?1",
            rusqlite::params![id],
            RawItem::from_row,
          )
          .optional()?;

        let Some(existing) = existing else {
          return Ok(None);
        };

        // Fields omitted in the patch retain their stored value.
        let name        = name.unwrap_or(existing.name);
        let description = description.unwrap_or(existing.description);

        conn.execute(
          "UPDATE items SET name = ?1, description = ?2, updatedAt = ?3
           WHERE id = ?4",
          rusqlite::params![name, description, now_str, id],
        )?;

        Ok(Some(RawItem {
          id,
          name,
          description,
          created_at: existing.created_at,
          updated_at: now_str,
        }))
      })
      .await?;

    raw.map(RawItem::into_item).transpose()
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM items WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(affected > 0)
  }
}
