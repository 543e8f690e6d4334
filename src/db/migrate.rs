//! Startup routine that brings the `todos` table to its current shape.
//!
//! Every step is idempotent, so it runs unconditionally on each boot.
//! Errors are returned to the caller, which treats them as fatal.

use crate::db::schema::{
    ADD_COMPLETED_COLUMN, COLUMN_EXISTS, COUNT_TODOS, CREATE_TODOS_TABLE, SEED_TODOS,
};
use crate::db::sqlite::SqlitePool;
use crate::error::TodoError;
use tracing::{debug, info};

/// Create the `todos` table if absent and add columns introduced since.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), TodoError> {
    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;

    if !has_column(pool, "todos", "completed").await? {
        info!("adding `completed` column to existing todos table");
        sqlx::query(ADD_COMPLETED_COLUMN).execute(pool).await?;
    }

    debug!("todos schema is up to date");
    Ok(())
}

pub async fn has_column(pool: &SqlitePool, table: &str, column: &str) -> Result<bool, TodoError> {
    let (count,): (i64,) = sqlx::query_as(COLUMN_EXISTS)
        .bind(table)
        .bind(column)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Insert the example items when the table holds no rows at all.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), TodoError> {
    let (count,): (i64,) = sqlx::query_as(COUNT_TODOS).fetch_one(pool).await?;
    if count > 0 {
        debug!(count, "todos table already populated; skipping seed");
        return Ok(());
    }

    let inserted = sqlx::query(SEED_TODOS).execute(pool).await?.rows_affected();
    info!(inserted, "seeded empty todos table");
    Ok(())
}
