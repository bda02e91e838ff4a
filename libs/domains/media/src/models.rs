use bytes::Bytes;
use database::mongodb::RecordId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content type recorded when the upload does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload cap used when none is configured: 15 MiB keeps the inline
/// document under MongoDB's 16 MiB BSON limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 15 * 1024 * 1024;

/// One family of stored media: which collection it lives in and what it is
/// attached to.
pub trait MediaKind: Send + Sync + 'static {
    /// Used in upload messages, e.g. "Event poster uploaded"
    const LABEL: &'static str;
    /// Used in not-found messages, e.g. "Poster not found"
    const ASSET: &'static str;
    const COLLECTION: &'static str;
    /// Document field holding the owner's id, e.g. `event_id`
    const OWNER_FIELD: &'static str;
}

#[derive(Debug, Clone, Copy)]
pub struct EventPoster;

impl MediaKind for EventPoster {
    const LABEL: &'static str = "Event poster";
    const ASSET: &'static str = "Poster";
    const COLLECTION: &'static str = "event_posters";
    const OWNER_FIELD: &'static str = "event_id";
}

#[derive(Debug, Clone, Copy)]
pub struct PromotionalVideo;

impl MediaKind for PromotionalVideo {
    const LABEL: &'static str = "Promotional video";
    const ASSET: &'static str = "Video";
    const COLLECTION: &'static str = "promotional_videos";
    const OWNER_FIELD: &'static str = "event_id";
}

#[derive(Debug, Clone, Copy)]
pub struct VenuePhoto;

impl MediaKind for VenuePhoto {
    const LABEL: &'static str = "Venue photo";
    const ASSET: &'static str = "Photo";
    const COLLECTION: &'static str = "venue_photos";
    const OWNER_FIELD: &'static str = "venue_id";
}

/// The `file` part of an upload, fully buffered
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub content: Bytes,
}

/// A media document about to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedia {
    /// Not checked against the owning collection
    pub owner_id: String,
    pub filename: Option<String>,
    pub content_type: String,
    pub content: Bytes,
    pub uploaded_at: DateTime,
}

impl NewMedia {
    /// Stamp an upload with the current time, defaulting the content type.
    pub fn from_upload(owner_id: String, file: UploadedFile) -> Self {
        Self {
            owner_id,
            filename: file.filename,
            content_type: file
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            content: file.content,
            uploaded_at: DateTime::now(),
        }
    }
}

/// A media document as read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMedia {
    pub id: RecordId,
    pub owner_id: String,
    pub filename: Option<String>,
    pub content_type: String,
    pub content: Bytes,
    pub uploaded_at: DateTime,
}

/// Body of a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadedResponse {
    /// e.g. "Venue photo uploaded"
    pub message: String,
    pub id: RecordId,
}

impl UploadedResponse {
    pub fn new<K: MediaKind>(id: RecordId) -> Self {
        Self {
            message: format!("{} uploaded", K::LABEL),
            id,
        }
    }
}

/// Multipart form accepted by the upload endpoints
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
