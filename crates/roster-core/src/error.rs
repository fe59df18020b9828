//! Error types for `roster-core`.

use thiserror::Error;

use crate::employee::EmployeeId;

/// A payload that violates a field constraint.
///
/// Validation is checked before any mutation, so a rejected payload never
/// leaves a partial write behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
  #[error("field `{0}` must not be empty")]
  Empty(&'static str),

  #[error("field `{field}` exceeds {max} characters")]
  TooLong { field: &'static str, max: usize },

  #[error("salary must not be negative (got {0})")]
  NegativeSalary(f64),

  #[error("salary must be a finite number")]
  NonFiniteSalary,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee not found: {0}")]
  NotFound(EmployeeId),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend fault (I/O, SQL) as a storage error.
  pub fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Error::Storage(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
