//! The `EmployeeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Higher layers (`roster-api`, `roster-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  employee::{Employee, EmployeeId, EmployeePayload},
  error::Error,
};

/// Abstraction over an employee store backend.
///
/// The store is the only writer and reader of persisted employee data. It
/// assigns identifiers atomically: no two concurrent `create` calls can
/// receive the same id, and ids are never reassigned after a delete.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  /// Validate `payload`, assign the next unused id, persist the record, and
  /// return it.
  ///
  /// Fails with [`Error::Validation`] if any field constraint is violated;
  /// nothing is persisted in that case.
  fn create(
    &self,
    payload: EmployeePayload,
  ) -> impl Future<Output = Result<Employee, Error>> + Send + '_;

  /// List all records in insertion (id) order. Deletes leave the order of
  /// the surviving records untouched.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Error>> + Send + '_;

  /// Retrieve the record with `id`. Fails with [`Error::NotFound`] if no
  /// such record exists.
  fn get(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<Employee, Error>> + Send + '_;

  /// Replace every field of the record with `id` except the id itself.
  ///
  /// This is a full replace, never a merge: the caller supplies the complete
  /// new state. Fails with [`Error::NotFound`] if `id` is absent and
  /// [`Error::Validation`] if the payload is malformed.
  fn update(
    &self,
    id: EmployeeId,
    payload: EmployeePayload,
  ) -> impl Future<Output = Result<Employee, Error>> + Send + '_;

  /// Remove the record with `id`. Fails with [`Error::NotFound`] if `id` is
  /// absent — including a second delete of the same id.
  fn delete(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<(), Error>> + Send + '_;
}
