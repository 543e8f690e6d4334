use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::db::ItemPatch;
use crate::middleware::json::{StrictJson, json_response};
use crate::{TodoError, router::TodoState};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// GET /api/todos
pub async fn list_todos(State(state): State<TodoState>) -> Result<Response, TodoError> {
    let items = state
        .store
        .list()
        .await
        .map_err(|e| e.during("failed to fetch todos"))?;
    Ok(json_response(StatusCode::OK, &items))
}

/// POST /api/todos -> 201 with the stored item.
pub async fn create_todo(
    State(state): State<TodoState>,
    StrictJson(req): StrictJson<CreateTodoRequest>,
) -> Result<Response, TodoError> {
    let title = normalize_title(&req.title)?;
    let item = state
        .store
        .create(&title)
        .await
        .map_err(|e| e.during("failed to create todo"))?;
    info!(id = item.id, "created todo");
    Ok(json_response(StatusCode::CREATED, &item))
}

/// PATCH /api/todos/{id} -> title and/or completed.
pub async fn update_todo(
    State(state): State<TodoState>,
    Path(raw_id): Path<String>,
    StrictJson(req): StrictJson<UpdateTodoRequest>,
) -> Result<Response, TodoError> {
    let id = parse_id(&raw_id)?;

    let patch = ItemPatch {
        title: req.title.as_deref().map(normalize_title).transpose()?,
        completed: req.completed,
    };
    if patch.is_empty() {
        return Err(TodoError::validation("title or completed is required"));
    }

    let item = state
        .store
        .update(id, patch)
        .await
        .map_err(|e| e.during("failed to update todo"))?;
    info!(id, "updated todo");
    Ok(json_response(StatusCode::OK, &item))
}

/// DELETE /api/todos/{id} -> 204, empty body.
pub async fn delete_todo(
    State(state): State<TodoState>,
    Path(raw_id): Path<String>,
) -> Result<Response, TodoError> {
    let id = parse_id(&raw_id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(|e| e.during("failed to delete todo"))?;
    info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Ids are store-assigned and start at 1.
pub fn parse_id(raw: &str) -> Result<i64, TodoError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TodoError::validation("invalid todo id")),
    }
}

pub fn normalize_title(raw: &str) -> Result<String, TodoError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TodoError::validation("title is required"));
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("9007199254740993").unwrap(), 9007199254740993);
    }

    #[test]
    fn parse_id_rejects_everything_else() {
        for raw in ["0", "-3", "abc", "", "1.5", " 2", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(TodoError::Validation(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn normalize_title_trims_whitespace() {
        assert_eq!(normalize_title("  Buy milk\n").unwrap(), "Buy milk");
        assert_eq!(normalize_title("a  b").unwrap(), "a  b");
    }

    #[test]
    fn normalize_title_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(
                normalize_title(raw),
                Err(TodoError::Validation(msg)) if msg == "title is required"
            ));
        }
    }
}
