//! Type-safe error codes for API responses.
//!
//! Each error code has:
//! - a string form for clients (e.g., "NOT_FOUND")
//! - an integer form for logs and monitoring (e.g., 1004)
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! assert_eq!(code.default_message(), "Resource not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body or form could not be interpreted
    BadRequest,

    /// Invalid JSON format in request body
    InvalidJson,

    /// JSON body was well-formed but did not match the expected shape
    JsonExtraction,

    /// No document with the requested identifier
    NotFound,

    /// Multipart upload was malformed or missing its `file` part
    MalformedUpload,

    /// Request body exceeded the configured size cap
    PayloadTooLarge,

    /// Something the process could not recover from
    InternalError,

    /// A dependency (usually the document store) is not reachable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Document store rejected or failed the operation
    DatabaseError,

    /// Document store could not be reached in time
    DatabaseUnavailable,

    /// A stored document could not be decoded
    DatabaseDecode,

    /// A value could not be encoded for the store
    DatabaseEncode,

    // I/O errors (4000s)
    /// File system or socket I/O error
    IoError,

    // JSON errors (5000s)
    /// JSON serialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier that clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidJson => "INVALID_JSON",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::MalformedUpload => "MALFORMED_UPLOAD",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseDecode => "DATABASE_DECODE",
            Self::DatabaseEncode => "DATABASE_ENCODE",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: Serialization errors
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::BadRequest.code(), 1001);
    /// assert_eq!(ErrorCode::DatabaseError.code(), 2001);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1001,
            Self::InvalidJson => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MalformedUpload => 1006,
            Self::PayloadTooLarge => 1007,
            Self::ServiceUnavailable => 1011,

            Self::DatabaseError => 2001,
            Self::DatabaseUnavailable => 2002,
            Self::DatabaseDecode => 2003,
            Self::DatabaseEncode => 2004,

            Self::IoError => 4001,

            Self::SerdeJsonError => 5001,
        }
    }

    /// Default user-facing message; handlers usually supply a more specific one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Request could not be processed",
            Self::InvalidJson => "Invalid JSON format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::MalformedUpload => "Upload must be multipart/form-data with a 'file' field",
            Self::PayloadTooLarge => "Request body is too large",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseUnavailable => "Database is temporarily unavailable",
            Self::DatabaseDecode => "Failed to decode stored document",
            Self::DatabaseEncode => "Failed to encode document",
            Self::IoError => "I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
