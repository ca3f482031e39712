use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed aggregation row: {0}")]
    Decode(String),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Convert AnalyticsError to AppError for standardized error responses
impl From<AnalyticsError> for AppError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::Database(msg) => AppError::InternalServerError(msg),
            AnalyticsError::Decode(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AnalyticsError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AnalyticsError {
    fn from(err: mongodb::error::Error) -> Self {
        AnalyticsError::Database(err.to_string())
    }
}
