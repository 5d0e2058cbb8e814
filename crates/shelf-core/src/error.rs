//! Structured validation failures.
//!
//! Validation never panics and never throws: a failed contract check
//! produces a [`ValidationErrors`] value carrying one message per
//! offending field, which upper layers render as a 400 response.

use serde::Serialize;
use thiserror::Error;

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   &'static str,
  pub message: String,
}

impl FieldError {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

/// The set of violations found while checking one input contract.
///
/// Always non-empty when returned as an `Err`. Field detail is carried in
/// the payload; the Display form stays short for log lines.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("validation failed ({} field(s))", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);
