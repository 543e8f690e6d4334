use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch},
};
use tower_http::trace::TraceLayer;

use crate::db::TodoStore;
use crate::handlers::todos::{create_todo, delete_todo, list_todos, update_todo};
use crate::middleware::cors::cors;

/// Largest accepted request body. Bigger bodies are answered with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared request state. Holds no mutable data of its own; everything lives
/// in the database behind `store`.
#[derive(Clone)]
pub struct TodoState {
    pub store: TodoStore,
}

impl TodoState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

pub fn todo_router(state: TodoState) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo).delete(delete_todo))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(axum::middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
