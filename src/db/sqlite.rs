use crate::db::models::{Item, ItemPatch};
use crate::db::schema::{DELETE_TODO, INSERT_TODO, SELECT_TODOS, UPDATE_TODO};
use crate::error::TodoError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::time::Duration;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Special database path selecting a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a pool for the given database file, creating the file if missing.
///
/// An in-memory database only lives as long as its connection, so it is
/// pinned to a single connection that is never recycled.
pub async fn connect(database_path: &str) -> Result<SqlitePool, TodoError> {
    if database_path == IN_MEMORY {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        return Ok(pool);
    }

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    info!(path = %database_path, "opened sqlite database");
    Ok(pool)
}

/// Repository over the `todos` table. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All items ordered by ascending id. Empty when the table has no rows.
    pub async fn list(&self) -> Result<Vec<Item>, TodoError> {
        let items = sqlx::query_as::<_, Item>(SELECT_TODOS)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Insert a new open item. `title` is stored as given.
    pub async fn create(&self, title: &str) -> Result<Item, TodoError> {
        let item = sqlx::query_as::<_, Item>(INSERT_TODO)
            .bind(title)
            .fetch_one(&self.pool)
            .await?;
        Ok(item)
    }

    /// Apply whichever fields of `patch` are set and return the updated item.
    ///
    /// An empty patch leaves the row untouched but still reports `NotFound`
    /// for a missing id.
    pub async fn update(&self, id: i64, patch: ItemPatch) -> Result<Item, TodoError> {
        sqlx::query_as::<_, Item>(UPDATE_TODO)
            .bind(patch.title)
            .bind(patch.completed)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        let result = sqlx::query(DELETE_TODO)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound);
        }
        Ok(())
    }
}
