use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MedicineError {
    #[error("Medicine not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type MedicineResult<T> = Result<T, MedicineError>;

/// Convert MedicineError to AppError for standardized error responses
impl From<MedicineError> for AppError {
    fn from(err: MedicineError) -> Self {
        match err {
            MedicineError::NotFound(id) => {
                AppError::NotFound(format!("Medicine {} not found", id))
            }
            MedicineError::Validation(msg) => AppError::BadRequest(msg),
            MedicineError::Database(msg) => AppError::InternalServerError(msg),
            MedicineError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for MedicineError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for MedicineError {
    fn from(err: mongodb::error::Error) -> Self {
        MedicineError::Database(err.to_string())
    }
}
