//! Custom extractors for Axum handlers.
//!
//! These reject with [`AppError`](crate::errors::AppError) so every failure
//! renders as the standard error body.

pub mod json_body;

pub use json_body::JsonBody;
