//! Database module: models, schema and storage for todo items.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL text for the `todos` table (SQLite)
//! - `migrate.rs`: idempotent schema setup and first-run seeding
//! - `sqlite.rs`: pool construction and the item store

pub mod migrate;
pub mod models;
pub mod schema;
pub mod sqlite;

pub use migrate::{ensure_schema, has_column, seed_if_empty};
pub use models::{Item, ItemPatch};
pub use sqlite::{SqlitePool, TodoStore, connect};
