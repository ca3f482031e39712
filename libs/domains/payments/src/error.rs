use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Payment not found or unchanged: {0}")]
    NotFound(Uuid),

    #[error("forbidden access")]
    Forbidden,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Payment processor error: {0}")]
    Gateway(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type PaymentResult<T> = Result<T, PaymentError>;

/// Convert PaymentError to AppError for standardized error responses
impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NotFound(id) => {
                AppError::NotFound(format!("Payment {} not found or unchanged", id))
            }
            PaymentError::Forbidden => AppError::Forbidden("forbidden access".to_string()),
            PaymentError::Validation(msg) => AppError::BadRequest(msg),
            // Processor failures surface as a generic 500; details stay in the logs
            PaymentError::Gateway(msg) => AppError::InternalServerError(msg),
            PaymentError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PaymentError {
    fn from(err: mongodb::error::Error) -> Self {
        PaymentError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        PaymentError::Gateway(err.to_string())
    }
}
