// Integration tests for the ApiResource derive, used through core_proc_macros
use core_proc_macros::ApiResource;

#[derive(ApiResource)]
#[allow(dead_code)]
pub struct Venue {
    name: String,
    capacity: i64,
}

#[derive(ApiResource)]
#[api_resource(name = "Guest", collection = "guests", tag = "Guest List")]
#[allow(dead_code)]
pub struct Attendee {
    name: String,
}

#[derive(ApiResource)]
#[allow(dead_code)]
pub struct Booking {
    status: String,
}

#[test]
fn test_venue_defaults() {
    assert_eq!(Venue::NAME, "Venue");
    assert_eq!(Venue::COLLECTION, "venues");
    assert_eq!(Venue::URL, "/venues");
    assert_eq!(Venue::URL_WITH_ID, "/venues/{id}");
    assert_eq!(Venue::TAG, "Venues");
}

#[test]
fn test_custom_attributes() {
    assert_eq!(Attendee::NAME, "Guest");
    assert_eq!(Attendee::COLLECTION, "guests");
    assert_eq!(Attendee::URL, "/guests");
    assert_eq!(Attendee::TAG, "Guest List");
}

#[test]
fn test_booking_defaults() {
    assert_eq!(Booking::COLLECTION, "bookings");
    assert_eq!(Booking::URL_WITH_ID, "/bookings/{id}");
}

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/event_resource.rs");
}
