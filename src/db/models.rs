use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo record as stored in the `todos` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Partial update for an [`Item`]. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}
