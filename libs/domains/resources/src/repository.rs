use async_trait::async_trait;
use database::mongodb::RecordId;

use crate::error::ResourceResult;
use crate::models::{Record, Resource};

/// Persistence for one resource kind
///
/// Every method is a single round trip to the store. Implementations report
/// "no such record" as `Ok(None)` / `Ok(false)` and leave the mapping to
/// `NotFound` to the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Insert a new record and return its store-assigned id
    async fn insert(&self, body: R) -> ResourceResult<RecordId>;

    /// Up to `limit` records in store order
    async fn find_all(&self, limit: i64) -> ResourceResult<Vec<Record<R>>>;

    async fn find_by_id(&self, id: RecordId) -> ResourceResult<Option<Record<R>>>;

    /// Overlay the patch's present fields. Returns whether a record matched.
    async fn update_by_id(&self, id: RecordId, patch: R::Patch) -> ResourceResult<bool>;

    /// Returns whether a record was removed
    async fn delete_by_id(&self, id: RecordId) -> ResourceResult<bool>;
}
