//! # Error Handling Middleware
//!
//! This module maps OpenDay's domain errors to HTTP status codes and JSON
//! error bodies. Store failures are logged here with their full cause; the
//! caller only ever sees the generic message attached to the error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use openday_core::errors::OpenDayError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use openday_api::middleware::error_handling::AppError;
/// use openday_core::errors::OpenDayError;
///
/// async fn handler() -> Result<Json<u32>, AppError> {
///     let count: Result<u32, eyre::Report> = Err(eyre::eyre!("connection reset"));
///     let count = count.map_err(OpenDayError::store("Failed to count rows"))?;
///     Ok(Json(count))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub OpenDayError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            OpenDayError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            OpenDayError::Store { context, source } => {
                tracing::error!(error = ?source, "{}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            OpenDayError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Automatic conversion from OpenDayError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, OpenDayError>` in handler functions that return `Result<T, AppError>`.
impl From<OpenDayError> for AppError {
    fn from(err: OpenDayError) -> Self {
        AppError(err)
    }
}

