use core_proc_macros::ApiResource;
use database::mongodb::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;

/// A record kind served by the generic CRUD router.
///
/// Implementors are the full field set as clients send it on create; `Patch`
/// is the same field set with every field optional, used by update.
pub trait Resource:
    ApiResource
    + Serialize
    + DeserializeOwned
    + ToSchema
    + Clone
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
{
    type Patch: Serialize + DeserializeOwned + ToSchema + Default + Clone + Debug + Send + Sync + 'static;

    /// Overlay the fields present in `patch`, leaving the rest untouched.
    fn apply(&mut self, patch: Self::Patch);
}

/// A stored record as returned by list and get: the store id plus the
/// record's own fields, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record<R> {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub body: R,
}

/// Body of a successful create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// e.g. "Event created"
    pub message: String,
    pub id: RecordId,
}

/// Body of a successful update or delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// e.g. "Venue deleted"
    pub message: String,
}

impl CreatedResponse {
    pub fn new<R: Resource>(id: RecordId) -> Self {
        Self {
            message: format!("{} created", R::NAME),
            id,
        }
    }
}

impl MessageResponse {
    pub fn updated<R: Resource>() -> Self {
        Self {
            message: format!("{} updated", R::NAME),
        }
    }

    pub fn deleted<R: Resource>() -> Self {
        Self {
            message: format!("{} deleted", R::NAME),
        }
    }
}

// Overwrite each `Some` field of the patch onto the target.
macro_rules! overlay {
    ($target:ident, $patch:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

/// A scheduled event at a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
pub struct Event {
    /// Id of the hosting venue; not checked for existence
    pub venue_id: String,
    pub event_title: String,
    pub event_biography: String,
    pub event_date: String,
    pub event_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
}

impl Resource for Event {
    type Patch = EventPatch;

    fn apply(&mut self, patch: EventPatch) {
        overlay!(
            self,
            patch,
            venue_id,
            event_title,
            event_biography,
            event_date,
            event_time
        );
    }
}

/// A person attending events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
pub struct Attendee {
    pub attendee_name: String,
    pub attendee_surname: String,
    pub attendee_email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Resource for Attendee {
    type Patch = AttendeePatch;

    fn apply(&mut self, patch: AttendeePatch) {
        overlay!(self, patch, attendee_name, attendee_surname, attendee_email);
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
pub struct Venue {
    pub venue_name: String,
    pub venue_address: String,
    pub capacity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VenuePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

impl Resource for Venue {
    type Patch = VenuePatch;

    fn apply(&mut self, patch: VenuePatch) {
        overlay!(self, patch, venue_name, venue_address, capacity);
    }
}

/// An attendee's reservation for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ApiResource)]
pub struct Booking {
    pub event_id: String,
    pub attendee_id: String,
    pub booking_date: String,
    /// Free-form, e.g. "confirmed"
    pub booking_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_status: Option<String>,
}

impl Resource for Booking {
    type Patch = BookingPatch;

    fn apply(&mut self, patch: BookingPatch) {
        overlay!(
            self,
            patch,
            event_id,
            attendee_id,
            booking_date,
            booking_status
        );
    }
}
