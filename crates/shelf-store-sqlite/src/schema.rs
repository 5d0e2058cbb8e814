//! SQL schema for the Shelf SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    createdAt   TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updatedAt   TEXT NOT NULL    -- ISO 8601 UTC; reset on every update
);

-- Secondary indexes backing the list operation's sort and filter paths.
CREATE INDEX IF NOT EXISTS items_created_idx ON items(createdAt);
CREATE INDEX IF NOT EXISTS items_name_idx    ON items(name);

PRAGMA user_version = 1;
";
