//! Document shapes shared by every collection.
//!
//! `Stored<P>` is what lives in the database: the generated `_id`, the
//! payload fields flattened alongside it, and two server-stamped BSON
//! datetimes. `Record<P>` is the normalized form handed to callers: the id
//! as a plain hex string and chrono timestamps. The internal ObjectId form
//! never leaves this crate.

use bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use tally_core::types::Timestamp;

use crate::error::DbError;

/// Marker for payload types persisted to a named collection.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin {
    /// Logical collection name.
    const COLLECTION: &'static str;
}

/// The BSON shape of a persisted document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Stored<P> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub data: P,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// A normalized document as returned to callers: payload plus generated
/// metadata (string id, creation and last-update timestamps).
#[derive(Debug, Clone, Serialize)]
pub struct Record<P> {
    pub id: String,
    #[serde(flatten)]
    pub data: P,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<P: Entity> Stored<P> {
    /// Normalize into a `Record`, renaming `_id` to a hex string `id`.
    pub fn into_record(self) -> Result<Record<P>, DbError> {
        let id = self.id.ok_or(DbError::MissingAfterWrite {
            collection: P::COLLECTION,
        })?;
        Ok(Record {
            id: id.to_hex(),
            data: self.data,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        })
    }
}

/// Parse a caller-supplied id string into an ObjectId.
pub fn parse_id(id: &str) -> Result<ObjectId, DbError> {
    ObjectId::parse_str(id).map_err(|_| DbError::MalformedId(id.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hex_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(
            parse_id("not-an-object-id"),
            Err(DbError::MalformedId(_))
        ));
    }
}
