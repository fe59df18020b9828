//! JSON REST API for the roster employee store.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::EmployeeStore`].
//! The router is stateless beyond the store handle it is given; transport
//! concerns (TLS, CORS, tracing) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(Arc::new(store));
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::EmployeeStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update_one::<S>)
        .delete(employees::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
  };
  use roster_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::api_router;

  async fn app() -> Router<()> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    api_router(Arc::new(store))
  }

  fn payload() -> Value {
    json!({
      "name": "Jane",
      "lastname": "Doe",
      "salary": 75_000.0,
      "address": "123 Main St",
      "in_vacation": false,
    })
  }

  async fn send(
    app: &Router<()>,
    method: &str,
    uri: &str,
    body: Option<&Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  // ── Full CRUD flow ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn full_employee_crud_flow() {
    let app = app().await;

    let (status, employee) =
      send(&app, "POST", "/employees", Some(&payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(employee["id"], 1);
    assert_eq!(employee["name"], "Jane");
    assert_eq!(employee["in_vacation"], false);

    let (status, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let mut update = payload();
    update["in_vacation"] = json!(true);
    let (status, updated) =
      send(&app, "PUT", "/employees/1", Some(&update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["in_vacation"], true);

    let (status, body) = send(&app, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, _) = send(&app, "GET", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn create_returns_record_equal_to_payload_plus_id() {
    let app = app().await;

    let (_, employee) = send(&app, "POST", "/employees", Some(&payload())).await;
    let mut expected = payload();
    expected["id"] = employee["id"].clone();
    assert_eq!(employee, expected);

    let id = employee["id"].as_i64().unwrap();
    let (status, fetched) =
      send(&app, "GET", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, expected);
  }

  #[tokio::test]
  async fn update_is_a_full_replace() {
    let app = app().await;
    send(&app, "POST", "/employees", Some(&payload())).await;

    let replacement = json!({
      "name": "Janet",
      "lastname": "Smith",
      "salary": 82_500.0,
      "address": "9 Elm Ave",
      "in_vacation": true,
    });
    let (status, updated) =
      send(&app, "PUT", "/employees/1", Some(&replacement)).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = replacement;
    expected["id"] = json!(1);
    assert_eq!(updated, expected);
  }

  // ── Not found ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_unknown_id_returns_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/employees/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn update_unknown_id_returns_404() {
    let app = app().await;
    let (status, _) =
      send(&app, "PUT", "/employees/999999", Some(&payload())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_unknown_id_returns_404() {
    let app = app().await;
    let (status, _) = send(&app, "DELETE", "/employees/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn second_delete_returns_404() {
    let app = app().await;
    send(&app, "POST", "/employees", Some(&payload())).await;

    let (status, _) = send(&app, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Validation ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_with_negative_salary_returns_422_and_creates_nothing() {
    let app = app().await;

    let mut bad = payload();
    bad["salary"] = json!(-100.0);
    let (status, body) = send(&app, "POST", "/employees", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (_, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(list, json!([]));
  }

  #[tokio::test]
  async fn create_with_empty_name_returns_422() {
    let app = app().await;
    let mut bad = payload();
    bad["name"] = json!("");
    let (status, _) = send(&app, "POST", "/employees", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn create_with_missing_field_returns_422() {
    let app = app().await;
    let mut bad = payload();
    bad.as_object_mut().unwrap().remove("in_vacation");
    let (status, _) = send(&app, "POST", "/employees", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn create_with_numeric_string_salary_returns_422() {
    // "50000" is JSON-parseable but not a number; no silent coercion.
    let app = app().await;
    let mut bad = payload();
    bad["salary"] = json!("50000");
    let (status, _) = send(&app, "POST", "/employees", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  }

  #[tokio::test]
  async fn update_with_invalid_payload_returns_422_and_keeps_record() {
    let app = app().await;
    send(&app, "POST", "/employees", Some(&payload())).await;

    let mut bad = payload();
    bad["address"] = json!("");
    let (status, _) = send(&app, "PUT", "/employees/1", Some(&bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, fetched) = send(&app, "GET", "/employees/1", None).await;
    assert_eq!(fetched["address"], "123 Main St");
  }

  // ── Malformed bodies ────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_with_invalid_json_returns_400() {
    let app = app().await;
    let req = Request::builder()
      .method("POST")
      .uri("/employees")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn create_without_content_type_returns_400() {
    let app = app().await;
    let req = Request::builder()
      .method("POST")
      .uri("/employees")
      .body(Body::from(payload().to_string()))
      .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }
}
