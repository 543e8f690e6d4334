#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use todoapp::db::{self, SqlitePool, TodoStore};
use todoapp::router::{TodoState, todo_router};
use tower::ServiceExt;

/// Fresh in-memory database with the current schema and no rows.
pub async fn empty_pool() -> SqlitePool {
    let pool = db::connect(db::sqlite::IN_MEMORY)
        .await
        .expect("failed to open in-memory sqlite");
    db::ensure_schema(&pool)
        .await
        .expect("failed to create schema");
    pool
}

pub async fn empty_store() -> TodoStore {
    TodoStore::new(empty_pool().await)
}

pub fn app(store: TodoStore) -> Router {
    todo_router(TodoState::new(store))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
