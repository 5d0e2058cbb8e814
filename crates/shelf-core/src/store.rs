//! The `ItemStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `shelf-store-sqlite`).
//! The HTTP layer (`shelf-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::{
  item::{Item, ItemPatch, NewItem},
  query::{ItemPage, ItemQuery},
};

/// Abstraction over an item store backend.
///
/// Not-found outcomes are expected results, not faults: `get` and
/// `update` return `None` and `delete` returns `false` for a missing
/// row. `Self::Error` is reserved for store I/O failure.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ItemStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new item with `createdAt = updatedAt = now` and return the
  /// persisted record, including its store-assigned id.
  fn create(
    &self,
    input: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Return one page of items matching `query`, together with the total
  /// match count before slicing.
  fn list<'a>(
    &'a self,
    query: &'a ItemQuery,
  ) -> impl Future<Output = Result<ItemPage, Self::Error>> + Send + 'a;

  /// Retrieve an item by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Merge `patch` over the stored row, bump `updatedAt`, and return the
  /// updated record. Returns `None` if no row matches `id`.
  fn update(
    &self,
    id: i64,
    patch: ItemPatch,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Remove the row if present. Returns `false` if no row was affected.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
