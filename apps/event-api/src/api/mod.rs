//! API routes module
//!
//! Every route is mounted at the root; paths are exactly the public ones.

pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(domain_resources::mongo_router(&state.db))
        .merge(domain_media::mongo_router(
            &state.db,
            state.config.media.max_upload_bytes,
        ))
        .merge(health::router(state.clone()))
}
