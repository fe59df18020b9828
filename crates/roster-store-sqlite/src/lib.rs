//! SQLite backend for the roster employee store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. That single connection also serialises
//! writes, which makes id assignment atomic under concurrent creates.

mod schema;
mod store;

pub use store::SqliteStore;
