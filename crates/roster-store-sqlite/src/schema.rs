//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` pragma.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` makes ids monotonic and never reused: a deleted record's
/// id is never handed to a later insert.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    lastname    TEXT    NOT NULL,
    salary      REAL    NOT NULL,
    address     TEXT    NOT NULL,
    in_vacation INTEGER NOT NULL,   -- 0 | 1
    created_at  TEXT    NOT NULL    -- ISO 8601 UTC; server-assigned
);

PRAGMA user_version = 1;
";
