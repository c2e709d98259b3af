//! Typed errors for the article service.
//!
//! Uses `thiserror` for the service-level taxonomy. Item-level ingestion
//! failures are *not* errors in this sense: they are collected as strings
//! in the batch report and never cross the batch boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can escape a retrieval, ingestion, or workflow call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied an out-of-range limit, threshold, or score.
    /// Rejected before any external call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The embedding provider returned no vector for required input.
    #[error("embedding unavailable for query text")]
    EmbeddingUnavailable,

    /// Single-row lookup or delete with no matching row.
    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: i32 },

    /// Search/extract provider call failed or returned nothing.
    #[error("content provider error: {0}")]
    ContentProvider(String),

    /// Query or transaction-level database failure. Commit failures roll
    /// back every staged row in the batch.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that escapes an infrastructure boundary.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::EmbeddingUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::ContentProvider(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Database(_) | ServiceError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
