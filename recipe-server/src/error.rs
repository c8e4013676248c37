//! Request-level errors and their HTTP mapping.
//!
//! Store failures surface as a 500 for the one request that hit them; the
//! service keeps serving. Every error body is `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("recipe {0} not found")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// The write body was not a JSON recipe. The detail is logged, not sent.
    #[error("Error reading request body")]
    InvalidBody(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "store operation failed"),
            AppError::InvalidBody(detail) => tracing::warn!(%detail, "failed to parse request body"),
            _ => tracing::debug!(error = %self, "request rejected"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
