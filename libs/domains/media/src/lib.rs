//! Media domain
//!
//! Upload and download of binary assets stored inline in MongoDB: event
//! posters, promotional videos and venue photos. Each kind has its own
//! collection and routes; all three share the service and store.
//!
//! # Example
//!
//! ```ignore
//! use domain_media::mongo_router;
//!
//! let db = client.database("event_management_db");
//! let app = axum::Router::new().merge(mongo_router(&db, 15 * 1024 * 1024));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

use axum::Router;

// Re-export commonly used types
pub use error::{MediaError, MediaResult};
pub use handlers::ApiDoc;
pub use models::{
    DEFAULT_CONTENT_TYPE, DEFAULT_MAX_UPLOAD_BYTES, EventPoster, MediaKind, NewMedia,
    PromotionalVideo, StoredMedia, UploadedFile, UploadedResponse, VenuePhoto,
};
pub use mongodb::MongoMediaStore;
pub use repository::MediaStore;
pub use service::MediaService;

/// All three media kinds backed by `db`, each upload capped at
/// `max_upload_bytes`.
pub fn mongo_router(db: &::mongodb::Database, max_upload_bytes: usize) -> Router {
    Router::new()
        .merge(handlers::posters::router(MediaService::with_max_upload_bytes(
            MongoMediaStore::<EventPoster>::new(db),
            max_upload_bytes,
        )))
        .merge(handlers::videos::router(MediaService::with_max_upload_bytes(
            MongoMediaStore::<PromotionalVideo>::new(db),
            max_upload_bytes,
        )))
        .merge(handlers::photos::router(MediaService::with_max_upload_bytes(
            MongoMediaStore::<VenuePhoto>::new(db),
            max_upload_bytes,
        )))
}
