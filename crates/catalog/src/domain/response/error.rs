use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppError;

/// Boundary-facing error shape. `status` is a stable machine-readable
/// kind so callers can tell bad input, missing records and conflicts
/// apart without parsing the message.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::Validation(_) => "VALIDATION",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Conflict(_) => "CONFLICT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::SqlxError(_) => "SERVICE_UNAVAILABLE",
        };

        ErrorResponse {
            status: status.to_string(),
            message: err.to_string(),
        }
    }
}
