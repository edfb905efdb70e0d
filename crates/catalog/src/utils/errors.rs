use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Store unavailability is its own failure kind; it must never be
    // reported to callers as NotFound.
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),
}
