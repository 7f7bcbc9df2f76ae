//! Translation of application errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use ledgerly_core::interpret::InterpretError;
use ledgerly_db::repositories::TransactionStoreError;
use ledgerly_shared::{AppError, types::AmountError};

/// Result alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler error rendered as a `{"error", "message"}` JSON response.
///
/// Wraps `AppError` so handlers can bubble failures with `?`; the status
/// and error code come from the wrapped variant. Server errors log the
/// full cause and answer with a generic message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AmountError> for ApiError {
    fn from(err: AmountError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<InterpretError> for ApiError {
    fn from(err: InterpretError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<TransactionStoreError> for ApiError {
    fn from(err: TransactionStoreError) -> Self {
        match err {
            TransactionStoreError::NotFound(_) => {
                Self(AppError::NotFound("Transaction not found".to_string()))
            }
            TransactionStoreError::NegativeStoredAmount(_)
            | TransactionStoreError::Database(_) => Self(AppError::Database(err.to_string())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Internal detail stays in the logs, never in the response body.
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({
            "error": self.0.error_code().to_ascii_lowercase(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
