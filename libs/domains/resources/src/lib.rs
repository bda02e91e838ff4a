//! Resources domain
//!
//! CRUD over the four record kinds of the event management API: events,
//! attendees, venues and bookings. Each kind lives in its own collection and
//! shares one generic service, store and handler set.
//!
//! # Example
//!
//! ```ignore
//! use domain_resources::mongo_router;
//!
//! let db = client.database("event_management_db");
//! let app = axum::Router::new().merge(mongo_router(&db));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

use axum::Router;

// Re-export commonly used types
pub use error::{ResourceError, ResourceResult};
pub use handlers::ApiDoc;
pub use models::{
    Attendee, AttendeePatch, Booking, BookingPatch, CreatedResponse, Event, EventPatch,
    MessageResponse, Record, Resource, Venue, VenuePatch,
};
pub use mongodb::MongoResourceStore;
pub use repository::ResourceStore;
pub use service::{LIST_LIMIT, ResourceService};

/// All four kinds, each backed by its own collection in `db`.
pub fn mongo_router(db: &::mongodb::Database) -> Router {
    Router::new()
        .merge(handlers::events::router(ResourceService::new(
            MongoResourceStore::<Event>::new(db),
        )))
        .merge(handlers::attendees::router(ResourceService::new(
            MongoResourceStore::<Attendee>::new(db),
        )))
        .merge(handlers::venues::router(ResourceService::new(
            MongoResourceStore::<Venue>::new(db),
        )))
        .merge(handlers::bookings::router(ResourceService::new(
            MongoResourceStore::<Booking>::new(db),
        )))
}
