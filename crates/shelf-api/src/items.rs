//! Handlers for `/items` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/items` | Body: `{"name":"...","description":"..."}`; 201 |
//! | `GET`    | `/items` | Optional `?search=&sort=&order=&limit=&offset=` |
//! | `GET`    | `/items/:id` | 404 if not found |
//! | `PATCH`  | `/items/:id` | Body: partial item, ≥1 field |
//! | `DELETE` | `/items/:id` | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use shelf_core::{
  item::Item,
  query::ItemPage,
  store::ItemStore,
  validate::{self, CreateItemInput, ListQueryInput, UpdateItemInput},
};

use crate::error::ApiError;

/// Reject ids the path parser accepted but the resource space does not
/// contain (zero and negative rowids are never assigned).
fn check_id(id: i64) -> Result<(), ApiError> {
  if id < 1 {
    return Err(ApiError::BadRequest("id must be a positive integer".into()));
  }
  Ok(())
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /items` — body: `{"name":"...", "description":"..."}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateItemInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ItemStore,
{
  let input = validate::create_item(body)?;
  let item = store
    .create(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(item)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /items[?search=...][&sort=...][&order=...][&limit=...][&offset=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(raw): Query<ListQueryInput>,
) -> Result<Json<ItemPage>, ApiError>
where
  S: ItemStore,
{
  let query = validate::list_query(raw)?;
  let page = store
    .list(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(page))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /items/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError>
where
  S: ItemStore,
{
  check_id(id)?;
  let item = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("item {id} not found")))?;
  Ok(Json(item))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /items/:id` — body: any subset of `name`/`description`,
/// at least one field.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateItemInput>,
) -> Result<Json<Item>, ApiError>
where
  S: ItemStore,
{
  check_id(id)?;
  let patch = validate::update_item(body)?;
  let item = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("item {id} not found")))?;
  Ok(Json(item))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /items/:id` — 204 with no body on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ItemStore,
{
  check_id(id)?;
  let removed = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !removed {
    return Err(ApiError::NotFound(format!("item {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}
