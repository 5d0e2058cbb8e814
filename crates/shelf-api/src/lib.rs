//! JSON REST API for Shelf.
//!
//! Exposes an axum [`Router`] backed by any [`shelf_core::store::ItemStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = shelf_api::router(Arc::new(store));
//! ```

pub mod error;
pub mod items;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  http::{Method, Uri},
  routing::get,
};
use serde::Deserialize;
use serde_json::json;
use shelf_core::store::ItemStore;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// with `SHELF_*` environment variables. Every field has a default so the
/// server runs with no config file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }
fn default_store_path() -> PathBuf { PathBuf::from("data.sqlite") }

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ItemStore + 'static,
{
  Router::new()
    .route("/items", get(items::list::<S>).post(items::create::<S>))
    .route(
      "/items/{id}",
      get(items::get_one::<S>)
        .patch(items::update_one::<S>)
        .delete(items::delete_one::<S>),
    )
    .route("/health", get(health))
    .fallback(not_found)
    .with_state(store)
}

/// `GET /health` — liveness probe.
async fn health() -> Json<serde_json::Value> {
  Json(json!({ "ok": true }))
}

/// Fallback for unmatched routes; the body names the attempted route.
async fn not_found(method: Method, uri: Uri) -> ApiError {
  ApiError::NotFound(format!("route not found: {method} {}", uri.path()))
}

// ─── Integration tests ────────────────────────────────────────────────────────
