//! The three input contracts: create, update, and list-query.
//!
//! Each contract accepts a permissive input shape (every field optional,
//! query-string numerics still text) and either returns the typed value
//! the repository consumes, or a [`ValidationErrors`] listing every
//! violation found. Nothing here touches the store.

use serde::Deserialize;

use crate::{
  error::{FieldError, ValidationErrors},
  item::{ItemPatch, NewItem},
  query::{ItemQuery, SortKey, SortOrder},
};

/// Bounds are counted in Unicode scalar values.
pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 1000;

pub const LIMIT_MIN: i64 = 1;
pub const LIMIT_MAX: i64 = 100;
pub const LIMIT_DEFAULT: u32 = 20;

// ─── Input shapes ────────────────────────────────────────────────────────────

/// Raw `POST /items` body, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItemInput {
  pub name:        Option<String>,
  pub description: Option<String>,
}

/// Raw `PATCH /items/{id}` body, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemInput {
  pub name:        Option<String>,
  pub description: Option<String>,
}

/// Raw `GET /items` query string. Numeric fields arrive as text and are
/// coerced during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryInput {
  pub search: Option<String>,
  pub sort:   Option<String>,
  pub order:  Option<String>,
  pub limit:  Option<String>,
  pub offset: Option<String>,
}

// ─── Contracts ───────────────────────────────────────────────────────────────

/// Create contract: `name` required (1–100 chars), `description`
/// optional (≤1000 chars, defaults to the empty string).
pub fn create_item(input: CreateItemInput) -> Result<NewItem, ValidationErrors> {
  let mut errors = Vec::new();

  match &input.name {
    None => errors.push(FieldError::new("name", "is required")),
    Some(name) => check_name(name, &mut errors),
  }
  if let Some(description) = &input.description {
    check_description(description, &mut errors);
  }

  if !errors.is_empty() {
    return Err(ValidationErrors(errors));
  }
  Ok(NewItem {
    name:        input.name.unwrap_or_default(),
    description: input.description.unwrap_or_default(),
  })
}

/// Update contract: both fields optional, at least one present; same
/// bounds as the create contract.
pub fn update_item(input: UpdateItemInput) -> Result<ItemPatch, ValidationErrors> {
  let mut errors = Vec::new();

  if input.name.is_none() && input.description.is_none() {
    errors.push(FieldError::new(
      "body",
      "at least one of name or description is required",
    ));
  }
  if let Some(name) = &input.name {
    check_name(name, &mut errors);
  }
  if let Some(description) = &input.description {
    check_description(description, &mut errors);
  }

  if !errors.is_empty() {
    return Err(ValidationErrors(errors));
  }
  Ok(ItemPatch {
    name:        input.name,
    description: input.description,
  })
}

/// List-query contract: optional free-text `search` (whitespace-only is
/// treated as absent), `sort` and `order` from closed vocabularies, and
/// coerced, range-checked `limit`/`offset`.
pub fn list_query(input: ListQueryInput) -> Result<ItemQuery, ValidationErrors> {
  let mut errors = Vec::new();

  let search = input.search.filter(|s| !s.trim().is_empty());

  let sort = match input.sort.as_deref() {
    None => SortKey::default(),
    Some("name") => SortKey::Name,
    Some("createdAt") => SortKey::CreatedAt,
    Some("updatedAt") => SortKey::UpdatedAt,
    Some(other) => {
      errors.push(FieldError::new(
        "sort",
        format!("must be one of name, createdAt, updatedAt (got {other:?})"),
      ));
      SortKey::default()
    }
  };

  let order = match input.order.as_deref() {
    None => SortOrder::default(),
    Some("asc") => SortOrder::Asc,
    Some("desc") => SortOrder::Desc,
    Some(other) => {
      errors.push(FieldError::new(
        "order",
        format!("must be asc or desc (got {other:?})"),
      ));
      SortOrder::default()
    }
  };

  let limit = coerce_int(
    "limit",
    input.limit.as_deref(),
    LIMIT_MIN,
    LIMIT_MAX,
    i64::from(LIMIT_DEFAULT),
    &mut errors,
  ) as u32;

  let offset = coerce_int(
    "offset",
    input.offset.as_deref(),
    0,
    i64::MAX,
    0,
    &mut errors,
  ) as u64;

  if !errors.is_empty() {
    return Err(ValidationErrors(errors));
  }
  Ok(ItemQuery { search, sort, order, limit, offset })
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
  let len = name.chars().count();
  if len == 0 {
    errors.push(FieldError::new("name", "must not be empty"));
  } else if len > NAME_MAX {
    errors.push(FieldError::new(
      "name",
      format!("must be at most {NAME_MAX} characters"),
    ));
  }
}

fn check_description(description: &str, errors: &mut Vec<FieldError>) {
  if description.chars().count() > DESCRIPTION_MAX {
    errors.push(FieldError::new(
      "description",
      format!("must be at most {DESCRIPTION_MAX} characters"),
    ));
  }
}

/// Parse an optional query-string integer and range-check it. Pushes a
/// field error and falls back to `default` on violation, so one request
/// can report every bad field at once.
fn coerce_int(
  field:   &'static str,
  raw:     Option<&str>,
  min:     i64,
  max:     i64,
  default: i64,
  errors:  &mut Vec<FieldError>,
) -> i64 {
  let Some(raw) = raw else { return default };
  match raw.parse::<i64>() {
    Ok(v) if (min..=max).contains(&v) => v,
    Ok(_) if max == i64::MAX => {
      errors.push(FieldError::new(field, format!("must be at least {min}")));
      default
    }
    Ok(_) => {
      errors.push(FieldError::new(
        field,
        format!("must be between {min} and {max}"),
      ));
      default
    }
    Err(_) => {
      errors.push(FieldError::new(field, "must be an integer"));
      default
    }
  }
}
