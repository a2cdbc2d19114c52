//! Request extractors
//!
//! `AppJson` wraps axum's JSON extractor so that malformed bodies come back
//! in the same `{"success": false, "error": ...}` envelope as every other
//! failure, instead of axum's plain-text rejection.

use crate::error::AppError;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Validation(vec![crate::validate::FieldError {
                field: "body",
                message: rejection_message(&rejection),
            }])),
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected application/json",
        _ => "Invalid JSON body",
    }
}
