//! # Error Handling Middleware
//!
//! Maps `SlotError` to HTTP status codes and the JSON error envelope shared
//! by every endpoint:
//!
//! ```json
//! { "status": "error", "message": "Failed to fetch slots", "error": "<details>" }
//! ```
//!
//! This is also where failed requests are logged; the fetch and format code
//! underneath does not log errors itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use slotproxy_core::{errors::SlotError, models::request::ErrorResponse};
use tracing::error;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch slots";

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `SlotError` and implements `IntoResponse`, so handlers
/// can return `Result<_, AppError>` and use `?` on provider calls.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotproxy_api::middleware::error_handling::AppError;
/// use slotproxy_core::errors::SlotError;
///
/// async fn handler() -> Result<Json<Vec<String>>, AppError> {
///     Err(AppError(SlotError::Provider("slot retrieval failed".to_string())))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            SlotError::Transport(report) => {
                error!(error = ?report, "Transport failure while fetching slots");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(FETCH_FAILED_MESSAGE, Some(self.0.to_string())),
                )
            }
            SlotError::Provider(_) => {
                error!(error = %self.0, "Provider rejected slot query");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(FETCH_FAILED_MESSAGE, Some(self.0.to_string())),
                )
            }
            SlotError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new(self.0.to_string(), None),
            ),
            SlotError::Configuration(_) => {
                error!(error = %self.0, "Server misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(FETCH_FAILED_MESSAGE, Some(self.0.to_string())),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Automatic conversion from SlotError to AppError
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Maps a SlotError to an HTTP response
pub fn map_error(err: SlotError) -> Response {
    AppError(err).into_response()
}
