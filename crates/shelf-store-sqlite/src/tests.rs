//! Integration tests for `SqliteStore` against an in-memory database.

use shelf_core::{
  item::{ItemPatch, NewItem},
  query::{ItemQuery, SortKey, SortOrder},
  store::ItemStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_item(name: &str) -> NewItem {
  NewItem {
    name:        name.into(),
    description: String::new(),
  }
}

fn described_item(name: &str, description: &str) -> NewItem {
  NewItem {
    name:        name.into(),
    description: description.into(),
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_equal_timestamps() {
  let s = store().await;

  let item = s.create(new_item("First")).await.unwrap();
  assert!(item.id >= 1);
  assert_eq!(item.name, "First");
  assert_eq!(item.description, "");
  assert_eq!(item.created_at, item.updated_at);
}

#[tokio::test]
async fn create_assigns_fresh_ids() {
  let s = store().await;

  let a = s.create(new_item("A")).await.unwrap();
  let b = s.create(new_item("B")).await.unwrap();
  assert_ne!(a.id, b.id);
  assert!(b.id > a.id);
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_round_trips_created_item() {
  let s = store().await;

  let created = s.create(described_item("Widget", "A small part")).await.unwrap();
  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert_eq!(s.get(9999).await.unwrap(), None);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_description_keeps_name_and_bumps_updated_at() {
  let s = store().await;
  let created = s.create(new_item("Stable")).await.unwrap();

  let patch = ItemPatch {
    name:        None,
    description: Some("now described".into()),
  };
  let updated = s.update(created.id, patch).await.unwrap().unwrap();

  assert_eq!(updated.name, "Stable");
  assert_eq!(updated.description, "now described");
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_name_only_keeps_description() {
  let s = store().await;
  let created = s.create(described_item("Old", "keep me")).await.unwrap();

  let patch = ItemPatch {
    name:        Some("New".into()),
    description: None,
  };
  let updated = s.update(created.id, patch).await.unwrap().unwrap();

  assert_eq!(updated.name, "New");
  assert_eq!(updated.description, "keep me");
}

#[tokio::test]
async fn update_persists() {
  let s = store().await;
  let created = s.create(new_item("Before")).await.unwrap();

  let patch = ItemPatch {
    name:        Some("After".into()),
    description: None,
  };
  s.update(created.id, patch).await.unwrap();

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "After");
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;

  let patch = ItemPatch {
    name:        Some("Ghost".into()),
    description: None,
  };
  assert!(s.update(9999, patch).await.unwrap().is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_row_then_reports_missing() {
  let s = store().await;
  let created = s.create(new_item("Doomed")).await.unwrap();

  assert!(s.delete(created.id).await.unwrap());
  assert_eq!(s.get(created.id).await.unwrap(), None);
  // Second delete affects no rows.
  assert!(!s.delete(created.id).await.unwrap());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;

  let page = s.list(&ItemQuery::default()).await.unwrap();
  assert_eq!(page.total, 0);
  assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_total_counts_all_matches_before_slicing() {
  let s = store().await;
  for i in 0..5 {
    s.create(new_item(&format!("Item {i}"))).await.unwrap();
  }

  let query = ItemQuery { limit: 2, ..Default::default() };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 5);
  assert_eq!(page.items.len(), 2);
}

#[tokio::test]
async fn list_offset_walks_pages() {
  let s = store().await;
  for name in ["a", "b", "c"] {
    s.create(new_item(name)).await.unwrap();
  }

  let query = ItemQuery {
    sort: SortKey::Name,
    order: SortOrder::Asc,
    limit: 2,
    offset: 2,
    ..Default::default()
  };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 3);
  assert_eq!(page.items.len(), 1);
  assert_eq!(page.items[0].name, "c");
}

#[tokio::test]
async fn list_offset_past_end_returns_empty_page() {
  let s = store().await;
  s.create(new_item("only")).await.unwrap();

  let query = ItemQuery { offset: 50, ..Default::default() };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 1);
  assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_search_is_case_insensitive_substring() {
  let s = store().await;
  s.create(new_item("Widget")).await.unwrap();
  s.create(new_item("Gadget")).await.unwrap();

  let query = ItemQuery {
    search: Some("widg".into()),
    ..Default::default()
  };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 1);
  assert_eq!(page.items[0].name, "Widget");
}

#[tokio::test]
async fn list_search_matches_description_too() {
  let s = store().await;
  s.create(described_item("Opaque", "a BLUE thing")).await.unwrap();
  s.create(new_item("Other")).await.unwrap();

  let query = ItemQuery {
    search: Some("blue".into()),
    ..Default::default()
  };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 1);
  assert_eq!(page.items[0].name, "Opaque");
}

#[tokio::test]
async fn list_search_without_match_is_empty() {
  let s = store().await;
  s.create(new_item("Widget")).await.unwrap();

  let query = ItemQuery {
    search: Some("nonexistent".into()),
    ..Default::default()
  };
  let page = s.list(&query).await.unwrap();
  assert_eq!(page.total, 0);
  assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_sorts_by_name_ascending() {
  let s = store().await;
  for name in ["banana", "apple", "cherry"] {
    s.create(new_item(name)).await.unwrap();
  }

  let query = ItemQuery {
    sort: SortKey::Name,
    order: SortOrder::Asc,
    ..Default::default()
  };
  let page = s.list(&query).await.unwrap();
  let names: Vec<&str> = page.items.iter().map(|i| i.name.as_str()).collect();
  assert_eq!(names, ["apple", "banana", "cherry"]);
}

#[tokio::test]
async fn list_default_order_is_newest_first() {
  let s = store().await;
  s.create(new_item("older")).await.unwrap();
  s.create(new_item("newer")).await.unwrap();

  let page = s.list(&ItemQuery::default()).await.unwrap();
  assert_eq!(page.items[0].name, "newer");
  assert_eq!(page.items[1].name, "older");
}
