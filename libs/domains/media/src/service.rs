//! Media Service - upload and download for one media kind

use database::mongodb::RecordId;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{MediaError, MediaResult};
use crate::models::{DEFAULT_MAX_UPLOAD_BYTES, MediaKind, NewMedia, StoredMedia, UploadedFile};
use crate::repository::MediaStore;

pub struct MediaService<K: MediaKind, S: MediaStore> {
    store: Arc<S>,
    max_upload_bytes: usize,
    _kind: PhantomData<fn() -> K>,
}

impl<K: MediaKind, S: MediaStore> MediaService<K, S> {
    pub fn new(store: S) -> Self {
        Self::with_max_upload_bytes(store, DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn with_max_upload_bytes(store: S, max_upload_bytes: usize) -> Self {
        Self {
            store: Arc::new(store),
            max_upload_bytes,
            _kind: PhantomData,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Store `file` against `owner_id`. The owner is not checked for existence.
    #[instrument(skip(self, file), fields(kind = K::LABEL, bytes = file.content.len()))]
    pub async fn upload(&self, owner_id: String, file: UploadedFile) -> MediaResult<RecordId> {
        if file.content.len() > self.max_upload_bytes {
            return Err(MediaError::PayloadTooLarge {
                size: file.content.len(),
                limit: self.max_upload_bytes,
            });
        }

        self.store
            .insert(NewMedia::from_upload(owner_id, file))
            .await
    }

    /// A malformed id is reported as not found without a store call.
    #[instrument(skip(self), fields(kind = K::LABEL))]
    pub async fn download(&self, id: &str) -> MediaResult<StoredMedia> {
        let id: RecordId = id.parse().map_err(|_| MediaError::NotFound(K::ASSET))?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(MediaError::NotFound(K::ASSET))
    }
}

impl<K: MediaKind, S: MediaStore> Clone for MediaService<K, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            max_upload_bytes: self.max_upload_bytes,
            _kind: PhantomData,
        }
    }
}
