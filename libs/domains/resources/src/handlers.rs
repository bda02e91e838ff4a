//! HTTP endpoints, one module per kind.
//!
//! Each kind gets its own documented handlers so the OpenAPI document names
//! concrete request and response schemas; they all delegate to the same
//! generic [`ResourceService`].

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    JsonBody,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse,
    },
};
use core_proc_macros::ApiResource;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ResourceResult;
use crate::models::{
    Attendee, AttendeePatch, Booking, BookingPatch, CreatedResponse, Event, EventPatch,
    MessageResponse, Record, Venue, VenuePatch,
};
use crate::repository::ResourceStore;
use crate::service::ResourceService;

/// OpenAPI documentation for the resource endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        events::create_event,
        events::list_events,
        events::get_event,
        events::update_event,
        events::delete_event,
        attendees::create_attendee,
        attendees::list_attendees,
        attendees::get_attendee,
        attendees::update_attendee,
        attendees::delete_attendee,
        venues::create_venue,
        venues::list_venues,
        venues::get_venue,
        venues::update_venue,
        venues::delete_venue,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::delete_booking,
    ),
    components(
        schemas(
            Event, EventPatch, Attendee, AttendeePatch, Venue, VenuePatch, Booking, BookingPatch,
            CreatedResponse, MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Events", description = "Event records"),
        (name = "Attendees", description = "Attendee records"),
        (name = "Venues", description = "Venue records"),
        (name = "Bookings", description = "Booking records")
    )
)]
pub struct ApiDoc;

// Paths and tags are passed as `tt` so the literals reach `utoipa::path`
// unwrapped.
macro_rules! resource_handlers {
    (
        mod $module:ident for $kind:ident / $patch:ident;
        tag = $tag:tt, collection = $list_path:tt, item = $item_path:tt;
        $create:ident, $list:ident, $get:ident, $update:ident, $delete:ident $(;)?
    ) => {
        pub mod $module {
            use super::*;

            /// Build the router for this kind around a store.
            pub fn router<S: ResourceStore<$kind> + 'static>(
                service: ResourceService<$kind, S>,
            ) -> Router {
                Router::new()
                    .route(
                        <$kind as ApiResource>::URL,
                        get($list::<S>).post($create::<S>),
                    )
                    .route(
                        <$kind as ApiResource>::URL_WITH_ID,
                        get($get::<S>).put($update::<S>).delete($delete::<S>),
                    )
                    .with_state(Arc::new(service))
            }

            /// Create a record
            #[utoipa::path(
                post,
                path = $list_path,
                tag = $tag,
                request_body = $kind,
                responses(
                    (status = 200, description = "Record created", body = CreatedResponse),
                    (status = 400, response = BadRequestResponse),
                    (status = 415, response = BadRequestResponse),
                    (status = 422, response = BadRequestResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $create<S: ResourceStore<$kind> + 'static>(
                State(service): State<Arc<ResourceService<$kind, S>>>,
                JsonBody(body): JsonBody<$kind>,
            ) -> ResourceResult<Json<CreatedResponse>> {
                let id = service.create(body).await?;
                Ok(Json(CreatedResponse::new::<$kind>(id)))
            }

            /// List up to 100 records
            #[utoipa::path(
                get,
                path = $list_path,
                tag = $tag,
                responses(
                    (status = 200, description = "Records in store order, each with its `_id`", body = [$kind]),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $list<S: ResourceStore<$kind> + 'static>(
                State(service): State<Arc<ResourceService<$kind, S>>>,
            ) -> ResourceResult<Json<Vec<Record<$kind>>>> {
                Ok(Json(service.list().await?))
            }

            /// Get a record by id
            #[utoipa::path(
                get,
                path = $item_path,
                tag = $tag,
                params(("id" = String, Path, description = "Record id (24 hex characters)")),
                responses(
                    (status = 200, description = "Record found, with its `_id`", body = $kind),
                    (status = 404, response = NotFoundResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $get<S: ResourceStore<$kind> + 'static>(
                State(service): State<Arc<ResourceService<$kind, S>>>,
                Path(id): Path<String>,
            ) -> ResourceResult<Json<Record<$kind>>> {
                Ok(Json(service.get(&id).await?))
            }

            /// Update the fields present in the body
            #[utoipa::path(
                put,
                path = $item_path,
                tag = $tag,
                params(("id" = String, Path, description = "Record id (24 hex characters)")),
                request_body = $patch,
                responses(
                    (status = 200, description = "Record updated", body = MessageResponse),
                    (status = 400, response = BadRequestResponse),
                    (status = 404, response = NotFoundResponse),
                    (status = 422, response = BadRequestResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $update<S: ResourceStore<$kind> + 'static>(
                State(service): State<Arc<ResourceService<$kind, S>>>,
                Path(id): Path<String>,
                JsonBody(patch): JsonBody<$patch>,
            ) -> ResourceResult<Json<MessageResponse>> {
                service.update(&id, patch).await?;
                Ok(Json(MessageResponse::updated::<$kind>()))
            }

            /// Delete a record
            #[utoipa::path(
                delete,
                path = $item_path,
                tag = $tag,
                params(("id" = String, Path, description = "Record id (24 hex characters)")),
                responses(
                    (status = 200, description = "Record deleted", body = MessageResponse),
                    (status = 404, response = NotFoundResponse),
                    (status = 500, response = InternalServerErrorResponse),
                    (status = 503, response = ServiceUnavailableResponse)
                )
            )]
            pub async fn $delete<S: ResourceStore<$kind> + 'static>(
                State(service): State<Arc<ResourceService<$kind, S>>>,
                Path(id): Path<String>,
            ) -> ResourceResult<Json<MessageResponse>> {
                service.delete(&id).await?;
                Ok(Json(MessageResponse::deleted::<$kind>()))
            }
        }
    };
}

resource_handlers! {
    mod events for Event / EventPatch;
    tag = "Events", collection = "/events", item = "/events/{id}";
    create_event, list_events, get_event, update_event, delete_event;
}

resource_handlers! {
    mod attendees for Attendee / AttendeePatch;
    tag = "Attendees", collection = "/attendees", item = "/attendees/{id}";
    create_attendee, list_attendees, get_attendee, update_attendee, delete_attendee;
}

resource_handlers! {
    mod venues for Venue / VenuePatch;
    tag = "Venues", collection = "/venues", item = "/venues/{id}";
    create_venue, list_venues, get_venue, update_venue, delete_venue;
}

resource_handlers! {
    mod bookings for Booking / BookingPatch;
    tag = "Bookings", collection = "/bookings", item = "/bookings/{id}";
    create_booking, list_bookings, get_booking, update_booking, delete_booking;
}
