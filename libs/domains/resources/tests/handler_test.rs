//! Handler tests for the resources domain
//!
//! These drive the per-kind routers over HTTP and check:
//! - Request deserialization and response shapes
//! - Status codes, including 404 for malformed ids
//! - The list cap
//!
//! The store is an in-memory implementation so the tests run without a
//! database; `integration_test.rs` covers the MongoDB store.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::RecordId;
use domain_resources::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Mutex;
use test_utils::{TestDataBuilder, assertions::assert_object_id};
use tower::ServiceExt; // For oneshot()

/// Insertion-ordered store held in memory
struct MemoryStore<R> {
    records: Mutex<Vec<(RecordId, R)>>,
}

impl<R> MemoryStore<R> {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn insert(&self, body: R) -> ResourceResult<RecordId> {
        let id = RecordId::generate();
        self.records.lock().unwrap().push((id, body));
        Ok(id)
    }

    async fn find_all(&self, limit: i64) -> ResourceResult<Vec<Record<R>>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .take(limit as usize)
            .map(|(id, body)| Record {
                id: *id,
                body: body.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: RecordId) -> ResourceResult<Option<Record<R>>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(id, body)| Record {
                id: *id,
                body: body.clone(),
            }))
    }

    async fn update_by_id(&self, id: RecordId, patch: R::Patch) -> ResourceResult<bool> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|(stored, _)| *stored == id) {
            Some((_, body)) => {
                body.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: RecordId) -> ResourceResult<bool> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|(stored, _)| *stored != id);
        Ok(records.len() < before)
    }
}

fn app() -> Router {
    Router::new()
        .merge(handlers::events::router(ResourceService::new(
            MemoryStore::<Event>::new(),
        )))
        .merge(handlers::attendees::router(ResourceService::new(
            MemoryStore::<Attendee>::new(),
        )))
        .merge(handlers::venues::router(ResourceService::new(
            MemoryStore::<Venue>::new(),
        )))
        .merge(handlers::bookings::router(ResourceService::new(
            MemoryStore::<Booking>::new(),
        )))
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST `body` and return the new id
async fn create(app: &Router, uri: &str, body: &Value) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", uri, body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response.into_body()).await;
    let id = json["id"].as_str().unwrap().to_string();
    assert_object_id(&id, "created id");
    id
}

fn venue_body(name: &str) -> Value {
    json!({ "venue_name": name, "venue_address": "1 Main St", "capacity": 300 })
}

#[tokio::test]
async fn test_create_event_returns_message_and_id() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("create_event");

    let response = app
        .oneshot(json_request(
            "POST",
            "/events",
            &json!({
                "venue_id": builder.object_id().to_hex(),
                "event_title": builder.name("event", "gala"),
                "event_biography": "Annual gala",
                "event_date": "2024-06-01",
                "event_time": "19:30"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["message"], "Event created");
    assert_object_id(json["id"].as_str().unwrap(), "event id");
}

#[tokio::test]
async fn test_create_then_get_round_trips_fields() {
    let app = app();
    let id = create(&app, "/venues", &venue_body("Hall")).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/venues/{id}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["_id"], id);
    assert_eq!(json["venue_name"], "Hall");
    assert_eq!(json["venue_address"], "1 Main St");
    assert_eq!(json["capacity"], 300);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let response = app()
        .oneshot(empty_request("GET", "/bookings"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_list_returns_at_most_100_in_insertion_order() {
    let app = app();
    let mut ids = Vec::new();
    for i in 0..101 {
        ids.push(create(&app, "/venues", &venue_body(&format!("Hall {i}"))).await);
    }

    let response = app.oneshot(empty_request("GET", "/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response.into_body()).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 100);
    assert_eq!(listed[0]["_id"], ids[0]);
    assert_eq!(listed[99]["venue_name"], "Hall 99");
}

#[tokio::test]
async fn test_get_malformed_id_is_404() {
    let response = app()
        .oneshot(empty_request("GET", "/events/not-an-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response.into_body()).await;
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["message"], "Event not found");
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let builder = TestDataBuilder::from_test_name("get_unknown");
    let response = app()
        .oneshot(empty_request(
            "GET",
            &format!("/attendees/{}", builder.object_id().to_hex()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await["message"],
        "Attendee not found"
    );
}

#[tokio::test]
async fn test_update_overlays_present_fields() {
    let app = app();
    let id = create(
        &app,
        "/attendees",
        &json!({
            "attendee_name": "Ada",
            "attendee_surname": "Lovelace",
            "attendee_email": "ada@example.com",
            "phone": "555-0100"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/attendees/{id}"),
            &json!({ "attendee_email": "ada@analytical.engine" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await["message"],
        "Attendee updated"
    );

    let response = app
        .oneshot(empty_request("GET", &format!("/attendees/{id}")))
        .await
        .unwrap();
    let json = json_body(response.into_body()).await;
    assert_eq!(json["attendee_email"], "ada@analytical.engine");
    assert_eq!(json["attendee_name"], "Ada");
    assert_eq!(json["phone"], "555-0100");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let builder = TestDataBuilder::from_test_name("update_unknown");
    let response = app()
        .oneshot(json_request(
            "PUT",
            &format!("/bookings/{}", builder.object_id().to_hex()),
            &json!({ "booking_status": "cancelled" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await["message"],
        "Booking not found"
    );
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app();
    let id = create(&app, "/venues", &venue_body("Annex")).await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/venues/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await["message"],
        "Venue deleted"
    );

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/venues/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete finds nothing either
    let response = app
        .oneshot(empty_request("DELETE", &format!("/venues/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_missing_field_is_422() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/venues",
            &json!({ "venue_name": "Hall", "venue_address": "1 Main St" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response.into_body()).await["error"],
        "JSON_EXTRACTION"
    );
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/events")
        .header("content-type", "application/json")
        .body(Body::from("{\"event_title\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response.into_body()).await["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_kinds_are_isolated() {
    let app = app();
    let id = create(&app, "/venues", &venue_body("Hall")).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/events/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_record_is_retrievable_via_service() {
    let service = ResourceService::new(MemoryStore::<Booking>::new());
    let builder = TestDataBuilder::from_test_name("service_booking");

    let id = service
        .create(Booking {
            event_id: builder.object_id().to_hex(),
            attendee_id: builder.object_id().to_hex(),
            booking_date: "2024-05-20".into(),
            booking_status: "confirmed".into(),
        })
        .await
        .unwrap();

    let record = service.get(&id.to_hex()).await.unwrap();
    assert_eq!(record.body.booking_status, "confirmed");
}

#[tokio::test]
async fn test_create_with_unprefixed_fields_is_422() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/events",
            &json!({
                "venue_id": "v1",
                "title": "Gala",
                "description": "Annual gala",
                "date": "2024-06-01",
                "time": "19:30"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
