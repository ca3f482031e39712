use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AdvertisementError {
    #[error("Advertisement not found or unchanged: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type AdvertisementResult<T> = Result<T, AdvertisementError>;

/// Convert AdvertisementError to AppError for standardized error responses
impl From<AdvertisementError> for AppError {
    fn from(err: AdvertisementError) -> Self {
        match err {
            AdvertisementError::NotFound(id) => {
                AppError::NotFound(format!("Advertisement {} not found or unchanged", id))
            }
            AdvertisementError::Validation(msg) => AppError::BadRequest(msg),
            AdvertisementError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AdvertisementError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AdvertisementError {
    fn from(err: mongodb::error::Error) -> Self {
        AdvertisementError::Database(err.to_string())
    }
}
