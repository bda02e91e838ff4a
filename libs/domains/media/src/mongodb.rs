//! MongoDB implementation of MediaStore

use async_trait::async_trait;
use bytes::Bytes;
use database::mongodb::RecordId;
use mongodb::{
    Collection, Database,
    bson::{
        Binary, Bson, DateTime, Document, doc, from_document, oid::ObjectId, spec::BinarySubtype,
    },
};
use serde::Deserialize;
use std::marker::PhantomData;
use tracing::instrument;

use crate::error::MediaResult;
use crate::models::{MediaKind, NewMedia, StoredMedia};
use crate::repository::MediaStore;

/// Stores kind `K` in `K::COLLECTION`, one document per upload with the
/// payload inline as generic binary.
pub struct MongoMediaStore<K> {
    collection: Collection<Document>,
    _kind: PhantomData<fn() -> K>,
}

/// Fixed part of a media document; the owner field is handled separately
/// because its name depends on the kind.
#[derive(Deserialize)]
struct MediaDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    filename: Option<String>,
    content_type: String,
    content: Binary,
    uploaded_at: DateTime,
}

impl<K: MediaKind> MongoMediaStore<K> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(K::COLLECTION),
            _kind: PhantomData,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    fn encode(media: NewMedia) -> Document {
        let mut document = Document::new();
        document.insert(K::OWNER_FIELD, media.owner_id);
        document.insert("filename", media.filename);
        document.insert("content_type", media.content_type);
        document.insert(
            "content",
            Binary {
                subtype: BinarySubtype::Generic,
                bytes: media.content.to_vec(),
            },
        );
        document.insert("uploaded_at", media.uploaded_at);
        document
    }

    fn decode(mut document: Document) -> MediaResult<StoredMedia> {
        let owner_id = match document.remove(K::OWNER_FIELD) {
            Some(Bson::String(owner_id)) => owner_id,
            other => {
                return Err(mongodb::error::Error::custom(format!(
                    "{} document has no string {}: {:?}",
                    K::LABEL,
                    K::OWNER_FIELD,
                    other
                ))
                .into());
            }
        };
        let stored = from_document::<MediaDocument>(document).map_err(mongodb::error::Error::from)?;

        Ok(StoredMedia {
            id: stored.id.into(),
            owner_id,
            filename: stored.filename,
            content_type: stored.content_type,
            content: Bytes::from(stored.content.bytes),
            uploaded_at: stored.uploaded_at,
        })
    }
}

impl<K> Clone for MongoMediaStore<K> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<K: MediaKind> MediaStore for MongoMediaStore<K> {
    #[instrument(skip_all, fields(collection = K::COLLECTION, owner_id = %media.owner_id, bytes = media.content.len()))]
    async fn insert(&self, media: NewMedia) -> MediaResult<RecordId> {
        let oid = ObjectId::new();
        let mut document = Self::encode(media);
        document.insert("_id", oid);

        self.collection.insert_one(document).await?;

        tracing::info!(id = %oid, "{} uploaded", K::LABEL);
        Ok(oid.into())
    }

    #[instrument(skip_all, fields(collection = K::COLLECTION, id = %id))]
    async fn find_by_id(&self, id: RecordId) -> MediaResult<Option<StoredMedia>> {
        self.collection
            .find_one(doc! { "_id": id.object_id() })
            .await?
            .map(Self::decode)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventPoster, VenuePhoto};

    fn new_media() -> NewMedia {
        NewMedia {
            owner_id: "v1".to_string(),
            filename: Some("front.png".to_string()),
            content_type: "image/png".to_string(),
            content: Bytes::from_static(b"\x89PNG\r\n"),
            uploaded_at: DateTime::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn test_encode_uses_kind_owner_field_and_generic_binary() {
        let document = MongoMediaStore::<VenuePhoto>::encode(new_media());

        assert_eq!(document.get_str("venue_id").unwrap(), "v1");
        assert!(document.get("event_id").is_none());
        assert_eq!(
            document.get_binary_generic("content").unwrap(),
            &b"\x89PNG\r\n".to_vec()
        );
    }

    #[test]
    fn test_encode_missing_filename_is_null() {
        let mut media = new_media();
        media.filename = None;
        let document = MongoMediaStore::<EventPoster>::encode(media);
        assert_eq!(document.get("filename"), Some(&Bson::Null));
    }

    #[test]
    fn test_decode_round_trips_encoded_document() {
        let oid = ObjectId::new();
        let mut document = MongoMediaStore::<VenuePhoto>::encode(new_media());
        document.insert("_id", oid);

        let stored = MongoMediaStore::<VenuePhoto>::decode(document).unwrap();
        assert_eq!(stored.id.object_id(), oid);
        assert_eq!(stored.owner_id, "v1");
        assert_eq!(stored.content_type, "image/png");
        assert_eq!(stored.content, Bytes::from_static(b"\x89PNG\r\n"));
        assert_eq!(stored.uploaded_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_decode_rejects_wrong_owner_field() {
        let mut document = MongoMediaStore::<VenuePhoto>::encode(new_media());
        document.insert("_id", ObjectId::new());
        assert!(MongoMediaStore::<EventPoster>::decode(document).is_err());
    }
}
