//! SQL text for the todo storage. SQLite dialect.

/// `completed` is stored as INTEGER 0/1.
pub const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
)
"#;

/// Upgrades tables created before completion tracking existed.
pub const ADD_COMPLETED_COLUMN: &str =
    "ALTER TABLE todos ADD COLUMN completed INTEGER NOT NULL DEFAULT 0";

pub const COLUMN_EXISTS: &str =
    "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2";

pub const COUNT_TODOS: &str = "SELECT COUNT(*) FROM todos";

pub const SEED_TODOS: &str = r#"
INSERT INTO todos (title, completed)
VALUES
    ('Buy milk', 0),
    ('Read the docs', 0),
    ('Build TODO list UI', 0)
"#;

pub const SELECT_TODOS: &str = "SELECT id, title, completed FROM todos ORDER BY id ASC";

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, completed) VALUES (?1, 0)
RETURNING id, title, completed
"#;

/// NULL parameters leave the stored value untouched.
pub const UPDATE_TODO: &str = r#"
UPDATE todos SET
    title = COALESCE(?1, title),
    completed = COALESCE(?2, completed)
WHERE id = ?3
RETURNING id, title, completed
"#;

pub const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
