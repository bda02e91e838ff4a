use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    /// Carries the asset name, e.g. "Poster"
    #[error("{0} not found")]
    NotFound(&'static str),

    /// No `file` part, or a part that could not be read
    #[error("Malformed upload: {0}")]
    MalformedInput(String),

    #[error("Upload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

pub type MediaResult<T> = Result<T, MediaError>;

/// Convert MediaError to AppError for standardized error responses
impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::NotFound(asset) => AppError::NotFound(format!("{} not found", asset)),
            MediaError::MalformedInput(msg) => AppError::BadRequest(msg),
            e @ MediaError::PayloadTooLarge { .. } => AppError::PayloadTooLarge(e.to_string()),
            MediaError::Database(e) => AppError::Database(e),
            MediaError::Multipart(e) => AppError::Multipart(e),
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
