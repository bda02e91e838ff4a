/// Errors raised while establishing or probing a document-store connection
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level failure (URI parsing, pool creation, command errors)
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server could not be reached or rejected the initial handshake
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health probe failed on an established client
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Invalid connection settings
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
