//! MongoDB implementation of ResourceStore

use async_trait::async_trait;
use database::mongodb::RecordId;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc, from_document, oid::ObjectId, to_document},
    options::FindOptions,
};
use std::marker::PhantomData;
use tracing::instrument;

use crate::error::ResourceResult;
use crate::models::{Record, Resource};
use crate::repository::ResourceStore;

/// Stores each kind in its own collection, `R::COLLECTION`
///
/// Documents are handled as raw BSON so `_id` stays a native ObjectId in the
/// store while the API sees its hex form.
pub struct MongoResourceStore<R> {
    collection: Collection<Document>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: Resource> MongoResourceStore<R> {
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let events = MongoResourceStore::<Event>::new(&client.database("event_management_db"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, R::COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Document>(collection_name),
            _kind: PhantomData,
        }
    }

    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    fn by_id(id: RecordId) -> Document {
        doc! { "_id": id.object_id() }
    }

    fn decode(mut document: Document) -> ResourceResult<Record<R>> {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => oid,
            other => {
                return Err(mongodb::error::Error::custom(format!(
                    "{} document has a non-ObjectId _id: {:?}",
                    R::NAME,
                    other
                ))
                .into());
            }
        };
        let body = from_document::<R>(document).map_err(mongodb::error::Error::from)?;
        Ok(Record {
            id: id.into(),
            body,
        })
    }
}

impl<R> Clone for MongoResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MongoResourceStore<R> {
    #[instrument(skip_all, fields(collection = R::COLLECTION))]
    async fn insert(&self, body: R) -> ResourceResult<RecordId> {
        let mut document = to_document(&body).map_err(mongodb::error::Error::from)?;
        let oid = ObjectId::new();
        document.insert("_id", oid);

        self.collection.insert_one(document).await?;

        tracing::info!(id = %oid, "{} created", R::NAME);
        Ok(oid.into())
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION))]
    async fn find_all(&self, limit: i64) -> ResourceResult<Vec<Record<R>>> {
        let options = FindOptions::builder().limit(limit).build();

        let documents: Vec<Document> = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Self::decode).collect()
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION, id = %id))]
    async fn find_by_id(&self, id: RecordId) -> ResourceResult<Option<Record<R>>> {
        self.collection
            .find_one(Self::by_id(id))
            .await?
            .map(Self::decode)
            .transpose()
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION, id = %id))]
    async fn update_by_id(&self, id: RecordId, patch: R::Patch) -> ResourceResult<bool> {
        let fields = to_document(&patch).map_err(mongodb::error::Error::from)?;

        // `$set` rejects an empty document; an empty patch only has to match.
        if fields.is_empty() {
            let matched = self.collection.count_documents(Self::by_id(id)).await?;
            return Ok(matched > 0);
        }

        let result = self
            .collection
            .update_one(Self::by_id(id), doc! { "$set": fields })
            .await?;

        if result.matched_count > 0 {
            tracing::info!("{} updated", R::NAME);
        }
        Ok(result.matched_count > 0)
    }

    #[instrument(skip_all, fields(collection = R::COLLECTION, id = %id))]
    async fn delete_by_id(&self, id: RecordId) -> ResourceResult<bool> {
        let result = self.collection.delete_one(Self::by_id(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!("{} deleted", R::NAME);
        }
        Ok(result.deleted_count > 0)
    }
}
