use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures of the CRUD service
///
/// Malformed request bodies never get this far: `JsonBody` rejects them with
/// axum's own status before a handler runs.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Carries the kind's display name, e.g. "Event"
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type ResourceResult<T> = Result<T, ResourceError>;

/// Convert ResourceError to AppError for standardized error responses
impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(kind) => AppError::NotFound(format!("{} not found", kind)),
            ResourceError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
