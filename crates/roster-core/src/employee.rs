//! Employee — the single record type owned by the store.
//!
//! A record is always whole: every field except `id` comes from the caller,
//! and an update replaces all of them at once. There is no field-level patch.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Store-assigned record identifier. Monotonic, never reused.
pub type EmployeeId = i64;

pub const NAME_MAX: usize = 100;
pub const LASTNAME_MAX: usize = 100;
pub const ADDRESS_MAX: usize = 200;

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:          EmployeeId,
  pub name:        String,
  pub lastname:    String,
  pub salary:      f64,
  pub address:     String,
  pub in_vacation: bool,
}

/// The caller-supplied field set for create and update — an [`Employee`]
/// without its `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
  pub name:        String,
  pub lastname:    String,
  pub salary:      f64,
  pub address:     String,
  pub in_vacation: bool,
}

impl EmployeePayload {
  /// Check every field constraint; reports the first violation found.
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.name.is_empty() {
      return Err(ValidationError::Empty("name"));
    }
    if self.name.chars().count() > NAME_MAX {
      return Err(ValidationError::TooLong { field: "name", max: NAME_MAX });
    }
    if self.lastname.is_empty() {
      return Err(ValidationError::Empty("lastname"));
    }
    if self.lastname.chars().count() > LASTNAME_MAX {
      return Err(ValidationError::TooLong {
        field: "lastname",
        max:   LASTNAME_MAX,
      });
    }
    if !self.salary.is_finite() {
      return Err(ValidationError::NonFiniteSalary);
    }
    if self.salary < 0.0 {
      return Err(ValidationError::NegativeSalary(self.salary));
    }
    if self.address.is_empty() {
      return Err(ValidationError::Empty("address"));
    }
    if self.address.chars().count() > ADDRESS_MAX {
      return Err(ValidationError::TooLong {
        field: "address",
        max:   ADDRESS_MAX,
      });
    }
    Ok(())
  }

  /// Attach a store-assigned id, producing the full record.
  pub fn into_employee(self, id: EmployeeId) -> Employee {
    Employee {
      id,
      name: self.name,
      lastname: self.lastname,
      salary: self.salary,
      address: self.address,
      in_vacation: self.in_vacation,
    }
  }
}
