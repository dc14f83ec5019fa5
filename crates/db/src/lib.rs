//! Persistence shim over the document database.
//!
//! Connection lifecycle is explicit: `DbHandle::connect` is called once at
//! startup, the `Database` handle it exposes is injected into request
//! handlers, and `DbHandle::shutdown` is called after the server drains.
//! There is no lazily-initialized global client.

use std::time::Duration;

use bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

pub mod document;
pub mod entities;
pub mod error;
pub mod repository;

pub use document::{Entity, Record, Stored};
pub use error::DbError;
pub use repository::{Repository, DEFAULT_LIST_LIMIT};

/// How long the driver waits to find a usable server before failing.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// An owned connection to the document database.
pub struct DbHandle {
    client: Client,
    database: Database,
}

impl DbHandle {
    /// Connect to the database named `name` at `url`.
    pub async fn connect(url: &str, name: &str) -> Result<Self, DbError> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let database = client.database(name);
        Ok(Self { client, database })
    }

    /// A cheaply-cloneable handle on the logical database.
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Close all connections. Consumes the handle; clones of the
    /// `Database` taken earlier must not be used afterwards.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Round-trip a ping through the database.
pub async fn health_check(db: &Database) -> Result<(), DbError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
