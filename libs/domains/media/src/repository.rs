use async_trait::async_trait;
use database::mongodb::RecordId;

use crate::error::MediaResult;
use crate::models::{NewMedia, StoredMedia};

/// Persistence for one media collection
///
/// Media is write-once: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Insert the document, payload inline, and return its id
    async fn insert(&self, media: NewMedia) -> MediaResult<RecordId>;

    async fn find_by_id(&self, id: RecordId) -> MediaResult<Option<StoredMedia>>;
}
