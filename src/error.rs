use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum TodoError {
    /// Malformed or missing client input. The message is returned verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("todo not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    /// Storage failure tagged with the operation that hit it. `context` is
    /// the client-facing message.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: SqlxError,
    },
}

impl TodoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TodoError::Validation(msg.into())
    }

    /// Label a storage failure with the operation being served. Other
    /// variants pass through unchanged.
    pub fn during(self, context: &'static str) -> Self {
        match self {
            TodoError::DatabaseError(source) => TodoError::Storage { context, source },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::DatabaseError(_) | TodoError::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            TodoError::Validation(msg) => {
                debug!(reason = %msg, "rejecting request");
                msg
            }
            TodoError::NotFound => {
                debug!("todo not found");
                "todo not found".to_string()
            }
            TodoError::DatabaseError(e) => {
                error!(error = %e, "storage operation failed");
                "internal server error".to_string()
            }
            TodoError::Storage { context, source } => {
                error!(error = %source, "{context}");
                context.to_string()
            }
        };
        (status, body).into_response()
    }
}
