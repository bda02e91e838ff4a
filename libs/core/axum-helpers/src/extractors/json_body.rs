//! JSON extractor whose rejections use the standard error body.

use crate::errors::AppError;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Drop-in replacement for [`axum::Json`].
///
/// Status codes are the ones axum picks (400 for syntax errors, 415 for a
/// missing content type, 422 for shape mismatches); only the body changes.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_venue(JsonBody(venue): JsonBody<Venue>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
