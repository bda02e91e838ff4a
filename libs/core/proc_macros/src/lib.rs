// Re-export proc macros when their features are enabled
#[cfg(feature = "api_resource")]
pub use api_resource::ApiResource;

/// REST resource metadata.
///
/// Usually derived with the `ApiResource` macro.
///
/// # Examples
///
/// ```ignore
/// use core_proc_macros::ApiResource;
///
/// #[derive(ApiResource)]
/// pub struct Event {
///     title: String,
/// }
///
/// assert_eq!(Event::URL, "/events");
/// assert_eq!(Event::COLLECTION, "events");
/// ```
pub trait ApiResource {
    /// Singular label used in response messages (e.g., "Event")
    const NAME: &'static str;
    /// The store collection (e.g., "events")
    const COLLECTION: &'static str;
    /// The base URL path (e.g., "/events")
    const URL: &'static str;
    /// The URL path of a single record (e.g., "/events/{id}")
    const URL_WITH_ID: &'static str;
    /// The API documentation tag (e.g., "Events")
    const TAG: &'static str;
}
