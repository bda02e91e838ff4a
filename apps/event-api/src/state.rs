//! Application state management.
//!
//! Built once at start-up and handed to the route builders; the store
//! handles inside it are the only shared resources.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client and database share one pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// Database holding every collection this API serves
    pub db: Database,
}
