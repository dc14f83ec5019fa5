#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A driver-level failure: the database is unreachable, a command
    /// failed, or a stored document could not be decoded.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    /// A caller-supplied id string that is not a valid ObjectId.
    #[error("Malformed document id: {0}")]
    MalformedId(String),

    /// A payload that could not be serialized to a BSON document.
    #[error("Document serialization failed: {0}")]
    Bson(#[from] bson::ser::Error),

    /// A freshly written document whose re-read came back empty. Possible
    /// under a concurrent delete between the write and the read.
    #[error("Document in '{collection}' missing after write")]
    MissingAfterWrite { collection: &'static str },
}
