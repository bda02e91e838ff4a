//! Resource Service - the five CRUD operations, once for every kind

use database::mongodb::RecordId;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ResourceError, ResourceResult};
use crate::models::{Record, Resource};
use crate::repository::ResourceStore;

/// Maximum number of records returned by a list call
pub const LIST_LIMIT: i64 = 100;

/// Generic CRUD over one kind `R` backed by a store `S`
///
/// Path ids arrive as raw strings; one that is not a well-formed id is
/// reported as `NotFound` without touching the store.
pub struct ResourceService<R: Resource, S: ResourceStore<R>> {
    store: Arc<S>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: Resource, S: ResourceStore<R>> ResourceService<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            _kind: PhantomData,
        }
    }

    fn parse_id(raw: &str) -> ResourceResult<RecordId> {
        raw.parse().map_err(|_| ResourceError::NotFound(R::NAME))
    }

    #[instrument(skip_all, fields(kind = R::NAME))]
    pub async fn create(&self, body: R) -> ResourceResult<RecordId> {
        self.store.insert(body).await
    }

    #[instrument(skip_all, fields(kind = R::NAME))]
    pub async fn list(&self) -> ResourceResult<Vec<Record<R>>> {
        self.store.find_all(LIST_LIMIT).await
    }

    #[instrument(skip(self), fields(kind = R::NAME))]
    pub async fn get(&self, id: &str) -> ResourceResult<Record<R>> {
        let id = Self::parse_id(id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ResourceError::NotFound(R::NAME))
    }

    #[instrument(skip(self, patch), fields(kind = R::NAME))]
    pub async fn update(&self, id: &str, patch: R::Patch) -> ResourceResult<()> {
        let id = Self::parse_id(id)?;
        if self.store.update_by_id(id, patch).await? {
            Ok(())
        } else {
            Err(ResourceError::NotFound(R::NAME))
        }
    }

    #[instrument(skip(self), fields(kind = R::NAME))]
    pub async fn delete(&self, id: &str) -> ResourceResult<()> {
        let id = Self::parse_id(id)?;
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ResourceError::NotFound(R::NAME))
        }
    }
}

impl<R: Resource, S: ResourceStore<R>> Clone for ResourceService<R, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}
