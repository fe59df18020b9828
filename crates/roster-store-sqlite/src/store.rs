//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use roster_core::{
  Employee, EmployeeId, EmployeePayload, EmployeeStore, Error, Result,
};

use crate::schema::SCHEMA;

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::storage)
  }
}

/// Map an `employees` row to an [`Employee`]. Column order must match
/// [`COLUMNS`].
fn row_to_employee(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:          row.get(0)?,
    name:        row.get(1)?,
    lastname:    row.get(2)?,
    salary:      row.get(3)?,
    address:     row.get(4)?,
    in_vacation: row.get::<_, i64>(5)? != 0,
  })
}

const COLUMNS: &str = "id, name, lastname, salary, address, in_vacation";

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  async fn create(&self, payload: EmployeePayload) -> Result<Employee> {
    payload.validate()?;

    let recorded = payload.clone();
    let created_at = Utc::now().to_rfc3339();

    // INSERT and id read happen in one `call`, on the connection's single
    // database thread, so concurrent creates cannot observe each other's
    // rowid.
    let id: EmployeeId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees
             (name, lastname, salary, address, in_vacation, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            recorded.name,
            recorded.lastname,
            recorded.salary,
            recorded.address,
            recorded.in_vacation as i64,
            created_at,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(Error::storage)?;

    Ok(payload.into_employee(id))
  }

  async fn list(&self) -> Result<Vec<Employee>> {
    self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {COLUMNS} FROM employees ORDER BY id"))?;
        let rows = stmt
          .query_map([], row_to_employee)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn get(&self, id: EmployeeId) -> Result<Employee> {
    let found: Option<Employee> = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM employees WHERE id = ?1"),
            rusqlite::params![id],
            row_to_employee,
          )
          .optional()?;
        Ok(row)
      })
      .await
      .map_err(Error::storage)?;

    found.ok_or(Error::NotFound(id))
  }

  async fn update(
    &self,
    id: EmployeeId,
    payload: EmployeePayload,
  ) -> Result<Employee> {
    payload.validate()?;

    let recorded = payload.clone();
    let changed = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE employees
             SET name = ?1, lastname = ?2, salary = ?3, address = ?4,
                 in_vacation = ?5
           WHERE id = ?6",
          rusqlite::params![
            recorded.name,
            recorded.lastname,
            recorded.salary,
            recorded.address,
            recorded.in_vacation as i64,
            id,
          ],
        )?;
        Ok(changed)
      })
      .await
      .map_err(Error::storage)?;

    if changed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(payload.into_employee(id))
  }

  async fn delete(&self, id: EmployeeId) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        let removed = conn.execute(
          "DELETE FROM employees WHERE id = ?1",
          rusqlite::params![id],
        )?;
        Ok(removed)
      })
      .await
      .map_err(Error::storage)?;

    if removed == 0 {
      return Err(Error::NotFound(id));
    }
    Ok(())
  }
}
