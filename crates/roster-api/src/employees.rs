//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | All records, insertion order |
//! | `POST`   | `/employees` | Body: [`EmployeePayload`]; returns 201 + record with assigned id |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PUT`    | `/employees/:id` | Full replace; 404 / 422 |
//! | `DELETE` | `/employees/:id` | 204 on success; a repeat delete is a 404 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{Employee, EmployeeId, EmployeePayload, EmployeeStore};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  let employees = store.list().await?;
  Ok(Json(employees))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  let Json(payload) = body?;
  let employee = store.create(payload).await?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let employee = store.get(id).await?;
  Ok(Json(employee))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id` — body is the complete replacement
/// [`EmployeePayload`]; omitted fields are not preserved from the prior
/// value.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EmployeeId>,
  body: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let Json(payload) = body?;
  let employee = store.update(id, payload).await?;
  Ok(Json(employee))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EmployeeId>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  store.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
