//! Core types and trait definitions for the roster employee store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod employee;
pub mod error;
pub mod store;

pub use employee::{Employee, EmployeeId, EmployeePayload};
pub use error::{Error, Result, ValidationError};
pub use store::EmployeeStore;
