//! List-query types: sorting, ordering, and offset/limit pagination.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The column a list request is ordered by. The wire vocabulary
/// (`name`, `createdAt`, `updatedAt`) is owned by the list-query
/// contract in [`crate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
  Name,
  #[default]
  CreatedAt,
  UpdatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  Asc,
  #[default]
  Desc,
}

/// Parameters for [`ItemStore::list`](crate::store::ItemStore::list).
///
/// Construct via [`crate::validate::list_query`], which applies the
/// defaults and range checks. `Default` yields the unfiltered first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
  /// Case-insensitive substring filter over `name` and `description`.
  /// `None` disables filtering.
  pub search: Option<String>,
  pub sort:   SortKey,
  pub order:  SortOrder,
  /// Maximum rows returned; 1–100.
  pub limit:  u32,
  /// Rows skipped before the first returned row.
  pub offset: u64,
}

impl Default for ItemQuery {
  fn default() -> Self {
    Self {
      search: None,
      sort:   SortKey::default(),
      order:  SortOrder::default(),
      limit:  crate::validate::LIMIT_DEFAULT,
      offset: 0,
    }
  }
}

/// One page of list results.
///
/// `total` counts every row matching the filter, independent of the
/// `limit`/`offset` slice — pagination UIs need it to size themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
  pub total: u64,
  pub items: Vec<Item>,
}
