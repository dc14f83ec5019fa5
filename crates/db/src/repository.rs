//! Generic repository: shared create/get/update/delete/list logic for
//! every collection, parameterized by the payload type.
//!
//! Timestamps are stamped here, server-side: create sets `created_at` and
//! `updated_at` to the same instant; update refreshes only `updated_at`.
//! Create and update write first and then re-read the document by id; the
//! two steps are not transactional, so a concurrent delete between them
//! surfaces as a missing re-read.

use bson::{doc, Document};
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};

use crate::document::{parse_id, Entity, Record, Stored};
use crate::error::DbError;

/// Maximum number of documents returned by `list`.
pub const DEFAULT_LIST_LIMIT: i64 = 1000;

/// Typed handle on one collection.
#[derive(Clone)]
pub struct Repository<P: Entity> {
    collection: Collection<Stored<P>>,
}

impl<P: Entity> Repository<P> {
    /// Bind to the entity's collection in the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(P::COLLECTION),
        }
    }

    /// Insert a payload with both timestamps stamped to now, then re-read
    /// and return the normalized document.
    pub async fn create(&self, payload: P) -> Result<Record<P>, DbError> {
        let now = bson::DateTime::now();
        let stored = Stored {
            id: None,
            data: payload,
            created_at: now,
            updated_at: now,
        };

        let result = self.collection.insert_one(&stored).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(DbError::MissingAfterWrite {
                collection: P::COLLECTION,
            })?;

        tracing::debug!(collection = P::COLLECTION, id = %id, "Document inserted");

        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(DbError::MissingAfterWrite {
                collection: P::COLLECTION,
            })?
            .into_record()
    }

    /// Fetch one normalized document by its string id.
    pub async fn get(&self, id: &str) -> Result<Option<Record<P>>, DbError> {
        let oid = parse_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Stored::into_record)
            .transpose()
    }

    /// Replace all payload fields of the document matching `id` and stamp
    /// `updated_at`; `created_at` is left untouched. Returns the re-read
    /// normalized document, or `None` when no document matches.
    ///
    /// Absent optional fields are written as nulls so a full-document
    /// update never leaves stale values behind.
    pub async fn update(&self, id: &str, payload: P) -> Result<Option<Record<P>>, DbError> {
        let oid = parse_id(id)?;
        let mut updates = bson::to_document(&payload)?;
        updates.insert("updated_at", bson::DateTime::now());

        self.collection
            .update_one(doc! { "_id": oid }, doc! { "$set": updates })
            .await?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Stored::into_record)
            .transpose()
    }

    /// Delete the document matching `id`. Returns `true` if exactly one
    /// document was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        let oid = parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count == 1)
    }

    /// List up to the default cap, sorted by calendar date ascending.
    ///
    /// The query itself carries no date filter; period filtering happens
    /// in the API layer after this capped load.
    pub async fn list_by_date(&self) -> Result<Vec<Record<P>>, DbError> {
        self.list(doc! {}, DEFAULT_LIST_LIMIT, Some(doc! { "date": 1 }))
            .await
    }

    /// List up to `limit` matching documents, optionally sorted, each
    /// normalized.
    pub async fn list(
        &self,
        filter: Document,
        limit: i64,
        sort: Option<Document>,
    ) -> Result<Vec<Record<P>>, DbError> {
        let mut find = self.collection.find(filter).limit(limit);
        if let Some(sort) = sort {
            find = find.sort(sort);
        }

        let stored: Vec<Stored<P>> = find.await?.try_collect().await?;
        stored.into_iter().map(Stored::into_record).collect()
    }
}
