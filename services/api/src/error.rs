//! Central error type for the API service
//!
//! Every failure maps to the uniform envelope `{"success": false, "error": ...}`.
//! The error payload is a string except for validation failures, which carry
//! the validator's per-field list verbatim. Statuses follow the taxonomy:
//! 400 validation, 404 missing parent, 403 identity mismatch, 409 uniqueness
//! or guarded-state conflict, 500 store failure.

use crate::validate::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            // An index conflict slipping past the application-level checks is
            // the check-then-insert race being stopped by the store.
            StoreError::DuplicateKey { collection, index } => {
                AppError::Conflict(format!("duplicate {index} in {collection}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Validation(fields) => (StatusCode::BAD_REQUEST, json!(fields)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, json!(msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!(msg)),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Internal Server Error"),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err: AppError = StoreError::DuplicateKey {
            collection: "markets",
            index: "name",
        }
        .into();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
